use chrono::{NaiveDate, NaiveTime};

use crate::models::{BookingRecord, BookingStatus, Portfolio, TalentRecord, User};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid seed time")
}

/// Registered users shipped with the reference catalog
pub fn seed_users() -> Vec<User> {
    vec![
        User {
            id: "1".to_string(),
            first_name: "Jean".to_string(),
            last_name: "Rukundo".to_string(),
            email: "jean.rukundo@gmail.com".to_string(),
            phone: "+250 788 123 456".to_string(),
            location: "Kigali".to_string(),
            joined_date: date(2024, 1, 15),
        },
        User {
            id: "2".to_string(),
            first_name: "Marie".to_string(),
            last_name: "Uwimana".to_string(),
            email: "marie.uwimana@gmail.com".to_string(),
            phone: "+250 789 234 567".to_string(),
            location: "Butare".to_string(),
            joined_date: date(2024, 2, 20),
        },
    ]
}

/// Talent catalog shipped with the service
pub fn seed_talents() -> Vec<TalentRecord> {
    vec![
        TalentRecord {
            id: "1".to_string(),
            user_id: "2".to_string(),
            artist_name: "Amahoro Traditional Dancers".to_string(),
            category: "Traditional Dance".to_string(),
            specialties: vec![
                "Intore Dance".to_string(),
                "Wedding Ceremonies".to_string(),
                "Cultural Events".to_string(),
            ],
            bio: "Professional traditional dance group specializing in authentic Rwandan \
                  cultural performances. We bring the spirit of Rwanda to every event."
                .to_string(),
            experience: "8 years".to_string(),
            hourly_rate: 50_000,
            location: "Kigali".to_string(),
            availability: vec![
                "Monday".to_string(),
                "Tuesday".to_string(),
                "Wednesday".to_string(),
                "Friday".to_string(),
                "Saturday".to_string(),
            ],
            portfolio: Portfolio {
                images: vec!["/placeholder.svg".to_string(), "/placeholder.svg".to_string()],
                videos: vec![],
                audio: vec![],
            },
            rating: 4.8,
            review_count: 24,
            verified: true,
            languages: vec![
                "Kinyarwanda".to_string(),
                "English".to_string(),
                "French".to_string(),
            ],
        },
        TalentRecord {
            id: "2".to_string(),
            user_id: "3".to_string(),
            artist_name: "Safari Jazz Ensemble".to_string(),
            category: "Contemporary Music".to_string(),
            specialties: vec![
                "Jazz".to_string(),
                "Afro-fusion".to_string(),
                "Corporate Events".to_string(),
            ],
            bio: "Modern jazz band blending traditional Rwandan rhythms with contemporary \
                  sounds. Perfect for sophisticated events and celebrations."
                .to_string(),
            experience: "5 years".to_string(),
            hourly_rate: 75_000,
            location: "Kigali".to_string(),
            availability: vec![
                "Thursday".to_string(),
                "Friday".to_string(),
                "Saturday".to_string(),
                "Sunday".to_string(),
            ],
            portfolio: Portfolio {
                images: vec!["/placeholder.svg".to_string()],
                videos: vec![],
                audio: vec![],
            },
            rating: 4.9,
            review_count: 18,
            verified: true,
            languages: vec![
                "English".to_string(),
                "Kinyarwanda".to_string(),
                "Swahili".to_string(),
            ],
        },
        TalentRecord {
            id: "3".to_string(),
            user_id: "4".to_string(),
            artist_name: "Ubusanane Arts Collective".to_string(),
            category: "Visual Arts".to_string(),
            specialties: vec![
                "Imigongo Painting".to_string(),
                "Basket Weaving".to_string(),
                "Cultural Workshops".to_string(),
            ],
            bio: "Collective of master artisans preserving and sharing traditional Rwandan \
                  craft techniques through live demonstrations and workshops."
                .to_string(),
            experience: "12 years".to_string(),
            hourly_rate: 40_000,
            location: "Nyanza".to_string(),
            availability: vec![
                "Monday".to_string(),
                "Tuesday".to_string(),
                "Wednesday".to_string(),
                "Thursday".to_string(),
                "Saturday".to_string(),
            ],
            portfolio: Portfolio {
                images: vec![
                    "/placeholder.svg".to_string(),
                    "/placeholder.svg".to_string(),
                    "/placeholder.svg".to_string(),
                ],
                videos: vec![],
                audio: vec![],
            },
            rating: 4.7,
            review_count: 31,
            verified: true,
            languages: vec!["Kinyarwanda".to_string(), "English".to_string()],
        },
    ]
}

/// Booking history shipped with the service
pub fn seed_bookings() -> Vec<BookingRecord> {
    vec![
        BookingRecord {
            id: "1".to_string(),
            client_id: "1".to_string(),
            talent_id: "1".to_string(),
            event_date: date(2024, 2, 15),
            event_time: time(18, 0),
            duration_hours: 3,
            event_type: "Wedding Reception".to_string(),
            location: "Kigali Serena Hotel".to_string(),
            description: "Traditional dance performance for wedding reception with 150 guests"
                .to_string(),
            status: BookingStatus::Confirmed,
            total_amount: 150_000,
            created_at: date(2024, 1, 20),
        },
        BookingRecord {
            id: "2".to_string(),
            client_id: "1".to_string(),
            talent_id: "2".to_string(),
            event_date: date(2024, 2, 28),
            event_time: time(19, 30),
            duration_hours: 2,
            event_type: "Corporate Event".to_string(),
            location: "Kigali Convention Centre".to_string(),
            description: "Jazz performance for company annual dinner".to_string(),
            status: BookingStatus::Pending,
            total_amount: 150_000,
            created_at: date(2024, 1, 25),
        },
    ]
}
