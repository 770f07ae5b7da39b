//! In-memory sample data standing in for a practice backend.
//!
//! Every slice's `Default` starts from these lists.

use super::appointments::{Appointment, AppointmentStatus};
use super::availability::{DaySchedule, DayStatus, SlotStatus, TimeSlot, Weekday};
use super::billing::{Invoice, InvoiceStatus, PaymentMethod};
use super::dashboard::{Metric, ReviewSnippet, ScheduleEntry, Trend};
use super::documents::{Document, DocumentKind};
use super::notifications::{Notification, NotificationKind};
use super::reviews::{Reply, Review};
use super::services::Service;

/// Display name of the signed-in practitioner.
pub const PRACTITIONER: &str = "Dr. Sarah";

fn s(value: &str) -> String {
    value.to_owned()
}

#[allow(clippy::too_many_arguments)]
fn appointment(
    id: u32,
    pet_name: &str,
    breed: &str,
    owner_name: &str,
    date: &str,
    time: &str,
    emergency: bool,
    status: AppointmentStatus,
    cancel_reason: Option<&str>,
) -> Appointment {
    Appointment {
        id,
        pet_name: s(pet_name),
        breed: s(breed),
        owner_name: s(owner_name),
        date: s(date),
        time: s(time),
        emergency,
        status,
        cancel_reason: cancel_reason.map(s),
    }
}

#[must_use]
pub fn appointments() -> Vec<Appointment> {
    vec![
        appointment(
            1,
            "Buddy",
            "Golden Retriever",
            "Sarah Johnson",
            "2025-09-07",
            "10:00AM - 10:30AM",
            false,
            AppointmentStatus::Upcoming,
            None,
        ),
        appointment(2, "Milo", "Beagle", "John Smith", "2025-09-08", "11:00AM - 11:30AM", true, AppointmentStatus::Request, None),
        appointment(3, "Bella", "Poodle", "Amy Williams", "2025-08-28", "9:30AM - 10:00AM", false, AppointmentStatus::Past, None),
        appointment(
            4,
            "Rocky",
            "Bulldog",
            "James Brown",
            "2025-09-01",
            "2:00PM - 2:30PM",
            false,
            AppointmentStatus::Canceled,
            Some("Owner canceled due to schedule change"),
        ),
    ]
}

fn service(id: &str, name: &str, category: &str, description: &str, price: u32, duration: u32, emergency: bool) -> Service {
    Service {
        id: s(id),
        name: s(name),
        category: s(category),
        description: s(description),
        price,
        duration,
        emergency_available: emergency,
        is_emergency: emergency,
    }
}

#[must_use]
pub fn services() -> Vec<Service> {
    vec![
        service(
            "1",
            "General Checkup",
            "Consultation",
            "Complete health examination for your pet including basic diagnostics",
            75,
            30,
            true,
        ),
        service(
            "2",
            "Vaccination",
            "Preventive Care",
            "Essential vaccination to keep your pet healthy and protected",
            45,
            15,
            false,
        ),
        service(
            "3",
            "Dental Cleaning",
            "Dental Care",
            "Professional dental cleaning and oral health assessment",
            120,
            60,
            false,
        ),
        service(
            "4",
            "Emergency Care",
            "Emergency",
            "Immediate medical attention for urgent pet health issues",
            150,
            45,
            true,
        ),
        service(
            "5",
            "Surgery Consultation",
            "Surgery",
            "Pre-surgical consultation and planning for complex procedures",
            200,
            90,
            true,
        ),
        service(
            "6",
            "Grooming",
            "Grooming",
            "Complete grooming service including bath, trim, and nail clipping",
            60,
            120,
            false,
        ),
    ]
}

#[must_use]
pub fn week_schedule() -> Vec<DaySchedule> {
    [
        (Weekday::Monday, "June 16", DayStatus::Available),
        (Weekday::Tuesday, "June 17", DayStatus::PartiallyBooked),
        (Weekday::Wednesday, "June 18", DayStatus::Available),
        (Weekday::Thursday, "June 19", DayStatus::Available),
        (Weekday::Friday, "June 20", DayStatus::Available),
        (Weekday::Saturday, "June 21", DayStatus::Available),
        (Weekday::Sunday, "June 22", DayStatus::Unavailable),
    ]
    .into_iter()
    .map(|(day, date, status)| DaySchedule { day, date: s(date), status })
    .collect()
}

#[must_use]
pub fn today_slots() -> Vec<TimeSlot> {
    [
        ("9:30", SlotStatus::Booked),
        ("10:30", SlotStatus::Available),
        ("11:30", SlotStatus::Available),
        ("12:30", SlotStatus::Unavailable),
        ("1:30", SlotStatus::Booked),
        ("2:30", SlotStatus::Available),
        ("3:30", SlotStatus::Available),
        ("4:30", SlotStatus::Available),
        ("5:30", SlotStatus::Unavailable),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (time, status))| TimeSlot { id: (i + 1).to_string(), time: s(time), status })
    .collect()
}

#[must_use]
pub fn blocked_dates() -> Vec<String> {
    vec![s("Dec 15"), s("Dec 26"), s("Dec 28")]
}

#[must_use]
pub fn documents() -> Vec<Document> {
    [DocumentKind::Image, DocumentKind::Pdf, DocumentKind::Image, DocumentKind::Pdf, DocumentKind::Pdf, DocumentKind::Pdf]
        .into_iter()
        .enumerate()
        .map(|(i, kind)| Document {
            id: (i + 1).to_string(),
            name: match kind {
                DocumentKind::Image => s("Mac_Vaccination.jpg"),
                DocumentKind::Pdf => s("Mac_Vaccination.pdf"),
            },
            kind,
            category: s("Medical Records"),
            owner: s("Max - John smith"),
            size: s("2.4 MB"),
            date: s("2024-01-01"),
        })
        .collect()
}

#[must_use]
pub fn invoices() -> Vec<Invoice> {
    [InvoiceStatus::Paid, InvoiceStatus::Unpaid, InvoiceStatus::Paid, InvoiceStatus::Paid]
        .into_iter()
        .enumerate()
        .map(|(i, status)| Invoice {
            id: super::billing::invoice_id(i + 1),
            date: s("2025-01-01"),
            pet: s("Max"),
            owner: s("John Smith"),
            service: s("General Checkup"),
            payment: PaymentMethod::CreditCard,
            amount: 75.0,
            tax: 5.0,
            total: 80.0,
            status,
        })
        .collect()
}

const LONG_REVIEW: &str = "Excellent service! Luna's vaccination went smoothly and Dr. Sarah provided great \
                           aftercare instructions. The appointment was on time and the clinic was very clean.";

#[must_use]
pub fn reviews() -> Vec<Review> {
    let review = |id: &str, comment: &str, reply: Option<Reply>| Review {
        id: s(id),
        pet_name: s("Buddy"),
        pet_breed: s("Golden Retriever"),
        service: s("General Checkup"),
        owner_name: s("John Smith"),
        rating: 5,
        date: s("2025-09-07"),
        comment: s(comment),
        reply,
    };
    vec![
        review("1", "", Some(Reply { text: s("Thank you for your feedback!"), date: s("2025-09-15") })),
        review("2", LONG_REVIEW, None),
        review("3", LONG_REVIEW, None),
    ]
}

#[must_use]
pub fn notifications() -> Vec<Notification> {
    let luna = |time: &str| format!("Emily Davis requested an appointment for Luna on Jan 16, 2024 at {time}");
    vec![
        Notification {
            id: s("1"),
            kind: NotificationKind::Appointment,
            title: s("New Appointment Request"),
            description: luna("10:30 AM"),
            timestamp: s("5 min"),
            is_read: false,
            requires_action: true,
            category: Some(s("Action Required")),
        },
        Notification {
            id: s("2"),
            kind: NotificationKind::Appointment,
            title: s("Upcoming Appointment"),
            description: luna("11:30 AM"),
            timestamp: s("30 min"),
            is_read: true,
            requires_action: false,
            category: Some(s("Appointment")),
        },
        Notification {
            id: s("3"),
            kind: NotificationKind::Review,
            title: s("New Review Received"),
            description: luna("10:30 AM"),
            timestamp: s("50 min"),
            is_read: false,
            requires_action: false,
            category: Some(s("Review")),
        },
    ]
}

#[must_use]
pub fn dashboard_metrics() -> Vec<Metric> {
    let metric = |title: &str, value: &str, subtitle: &str, trend: Trend, badge: Option<&str>| Metric {
        title: s(title),
        value: s(value),
        subtitle: s(subtitle),
        trend,
        badge: badge.map(s),
    };
    vec![
        metric("Today's Appointments", "8", "+2 from yesterday", Trend::Up, None),
        metric("This Month's Earnings", "$245", "+12% from last month", Trend::Up, None),
        metric("Average Rating", "4.8", "Based on 127 reviews", Trend::Neutral, Some("●")),
        metric("Services Completed", "156", "+8% this month", Trend::Up, None),
    ]
}

#[must_use]
pub fn todays_schedule() -> Vec<ScheduleEntry> {
    [
        ("Max", "John Smith", "General Checkup", "09:00 AM", false),
        ("Luna", "Emily Davis", "Vaccination", "10:30 AM", false),
        ("Charlie", "Mike Johnson", "Dental Cleaning", "02:00 PM", false),
        ("Bella", "Sara Wilson", "Surgery", "03:30 PM", true),
    ]
    .into_iter()
    .map(|(pet, owner, service, time, emergency)| ScheduleEntry {
        pet_name: s(pet),
        owner_name: s(owner),
        service: s(service),
        time: s(time),
        emergency,
    })
    .collect()
}

#[must_use]
pub fn recent_reviews() -> Vec<ReviewSnippet> {
    vec![
        ReviewSnippet {
            rating: 4,
            text: s("Excellent care for Max. Very professional and caring."),
            author: s("John Smith"),
        },
        ReviewSnippet {
            rating: 4,
            text: s("Luna is doing great after the vaccination. Thank you!"),
            author: s("Emily Davis"),
        },
    ]
}
