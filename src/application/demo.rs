//! Demo mode: canned reviews, no network.
//!
//! Useful for exercising the output pipeline end to end. Records are
//! filtered by source and date window exactly like live results.

use chrono::NaiveDate;

use crate::domain::date_window::DateWindow;
use crate::domain::review::{NormalizedReview, Rating, ReviewSource, SourceSelector};

const COMPANY: &str = "{company}";

struct DemoReview {
    title: &'static str,
    description: &'static str,
    date: (i32, u32, u32),
    reviewer_name: &'static str,
    rating: f64,
    helpful_votes: &'static str,
    source: ReviewSource,
}

const DEMO_REVIEWS: &[DemoReview] = &[
    DemoReview {
        title: "Excellent {company} Platform",
        description: "{company} has transformed our business operations completely. The features are outstanding and the integration capabilities are seamless. Customer support is very responsive and helpful.",
        date: (2023, 8, 15),
        reviewer_name: "John Smith",
        rating: 5.0,
        helpful_votes: "24",
        source: ReviewSource::G2,
    },
    DemoReview {
        title: "Powerful but Complex {company}",
        description: "Great features from {company} but requires significant training. The learning curve is steep but worth it once you get the hang of it. Customization options are extensive.",
        date: (2023, 9, 28),
        reviewer_name: "Sarah Johnson",
        rating: 4.0,
        helpful_votes: "18",
        source: ReviewSource::Capterra,
    },
    DemoReview {
        title: "Best Investment for Our Team - {company}",
        description: "{company}'s platform has streamlined our workflow significantly. The pricing is reasonable and the ROI has been excellent. Highly recommend for growing businesses.",
        date: (2023, 11, 2),
        reviewer_name: "Mike Chen",
        rating: 5.0,
        helpful_votes: "31",
        source: ReviewSource::SoftwareAdvice,
    },
    DemoReview {
        title: "Good Tool with Room for Improvement - {company}",
        description: "Solid platform from {company} with good core functionality. Some advanced features feel clunky and the reporting could be more robust. Overall satisfied with the value for money.",
        date: (2023, 7, 20),
        reviewer_name: "Lisa Rodriguez",
        rating: 3.5,
        helpful_votes: "12",
        source: ReviewSource::G2,
    },
    DemoReview {
        title: "Outstanding Customer Service from {company}",
        description: "What sets {company} apart is their exceptional customer service. Whenever we've had issues, their support team has been quick to respond and resolve problems effectively.",
        date: (2023, 10, 10),
        reviewer_name: "David Wilson",
        rating: 4.5,
        helpful_votes: "27",
        source: ReviewSource::Capterra,
    },
];

/// Sample reviews for `company_name` that fall inside `window` and come
/// from a selected source, in table order
pub fn generate_demo_reviews(
    company_name: &str,
    window: DateWindow,
    selector: SourceSelector,
) -> Vec<NormalizedReview> {
    DEMO_REVIEWS
        .iter()
        .filter(|demo| selector.includes(demo.source))
        .filter_map(|demo| {
            let (year, month, day) = demo.date;
            let date = NaiveDate::from_ymd_opt(year, month, day)?;
            window.contains(date).then(|| NormalizedReview {
                title: demo.title.replace(COMPANY, company_name),
                description: demo.description.replace(COMPANY, company_name),
                date,
                reviewer_name: demo.reviewer_name.to_string(),
                rating: Rating::new(demo.rating),
                helpful_votes: demo.helpful_votes.to_string(),
                source: demo.source,
            })
        })
        .collect()
}
