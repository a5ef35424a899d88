//! The backend's resources.
//!
//! | resource            | body      | update | public        | status |
//! |---------------------|-----------|--------|---------------|--------|
//! | `agents`            | multipart | POST   |               |        |
//! | `careers`           | json      | PUT    |               |        |
//! | `offices`           | multipart | POST   | reads         |        |
//! | `properties`        | multipart | POST   | reads         | yes    |
//! | `testimonials`      | multipart | POST   | reads         |        |
//! | `videos`            | json      | PUT    | reads         |        |
//! | `appointments`      | json      | POST   | create        | yes    |
//! | `events`            | multipart | POST   | reads         |        |
//! | `meetings`          | json      | PUT    |               |        |
//! | `seminars`          | json      | PUT    |               |        |
//! | `closed-deals`      | multipart | POST   |               |        |
//! | `client-properties` | multipart | POST   | create        | yes    |
//! | `inquiries`         | json      | POST   | create        | yes    |
//! | `statistics`        | read-only |        |               |        |

mod agent;
mod content;
mod deals;
mod inquiry;
mod property;
mod schedule;
mod statistic;

pub use agent::{Agent, AgentDraft};
pub use content::{
    Career, CareerDraft, Event, EventDraft, Office, OfficeDraft, Testimonial, TestimonialDraft, Video,
    VideoDraft,
};
pub use deals::{ClosedDeal, ClosedDealDraft, Submission, SubmissionDraft};
pub use inquiry::{Inquiry, InquiryDraft};
pub use property::{Amenity, Property, PropertyDraft, PropertySearch};
pub use schedule::{Appointment, AppointmentDraft, Meeting, MeetingDraft, Seminar, SeminarDraft};
pub use statistic::Statistic;

use crate::store::Store;

/// Register a container for every resource.
pub fn register_all(store: Store) -> Store {
    store
        .register::<Agent>()
        .register::<Career>()
        .register::<Office>()
        .register::<Property>()
        .register::<Testimonial>()
        .register::<Video>()
        .register::<Appointment>()
        .register::<Event>()
        .register::<Meeting>()
        .register::<Seminar>()
        .register::<ClosedDeal>()
        .register::<Submission>()
        .register::<Inquiry>()
        .register::<Statistic>()
}
