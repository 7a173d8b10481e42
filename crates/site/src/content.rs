//! Fixed event copy for the landing page.

use chrono::{DateTime, FixedOffset};

/// One slot on the day's programme.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleItem {
    pub time: &'static str,
    pub activity: &'static str,
    pub description: &'static str,
}

/// A highlight card under the schedule.
#[derive(Debug, Clone, Copy)]
pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// The day's programme in running order.
pub const SCHEDULE: &[ScheduleItem] = &[
    ScheduleItem {
        time: "10:00 AM",
        activity: "Welcome & Registration",
        description: "Traditional Namibian coffee and pastries",
    },
    ScheduleItem {
        time: "10:30 AM",
        activity: "Opening Ceremony",
        description: "Welcome speeches and blessing of the farm",
    },
    ScheduleItem {
        time: "11:00 AM",
        activity: "Guided Farm Tours",
        description: "Explore our sustainable farming practices",
    },
    ScheduleItem {
        time: "12:30 PM",
        activity: "Traditional Braai",
        description: "Authentic Namibian BBQ and local delicacies",
    },
    ScheduleItem {
        time: "2:00 PM",
        activity: "Cultural Performances",
        description: "Traditional music and dance",
    },
    ScheduleItem {
        time: "3:00 PM",
        activity: "Children's Activities",
        description: "Farm animal encounters and games",
    },
    ScheduleItem {
        time: "4:00 PM",
        activity: "Community Celebration",
        description: "Music, dancing, and fellowship",
    },
    ScheduleItem {
        time: "6:00 PM",
        activity: "Sunset Gathering",
        description: "Closing remarks and group photos",
    },
];

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: "📷",
        title: "Farm Tours",
        description: "Guided walks through our sustainable farming operations",
    },
    Highlight {
        icon: "⭐",
        title: "Cultural Show",
        description: "Traditional Namibian music and dance performances",
    },
    Highlight {
        icon: "🔥",
        title: "Traditional Braai",
        description: "Authentic Namibian BBQ with local specialties",
    },
    Highlight {
        icon: "🎈",
        title: "Family Fun",
        description: "Activities for children and interactive experiences",
    },
];

/// Farm contact details shown in the footer.
#[derive(Debug, Clone, Copy)]
pub struct Contact {
    pub phone: &'static str,
    pub email: &'static str,
    pub whatsapp_url: &'static str,
}

pub const CONTACT: Contact = Contact {
    phone: "+264 81 123 4567",
    email: "hello@arisfarm.na",
    whatsapp_url: "https://wa.me/26481234567",
};

pub const VENUE: &str = "Aris Farm";
pub const VENUE_AREA: &str = "Windhoek District, Namibia";

/// Event date and time as printed on the hero cards.
#[derive(Debug, Clone)]
pub struct EventWhen {
    /// e.g. "March 15, 2025"
    pub date: String,
    /// e.g. "Saturday, 10:00 AM"
    pub day_and_time: String,
}

impl EventWhen {
    /// Format the event start in its own offset.
    #[must_use]
    pub fn from_start(start: &DateTime<FixedOffset>) -> Self {
        Self {
            date: start.format("%B %-d, %Y").to_string(),
            day_and_time: start.format("%A, %-I:%M %p").to_string(),
        }
    }
}
