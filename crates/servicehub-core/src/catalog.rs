//! # Service Catalog
//!
//! The static, read-only catalog behind the home and search screens, plus the
//! seed data for the location and worker-bid flows.
//!
//! ## How Search Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Search                                       │
//! │                                                                         │
//! │  User types: "clean"                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  trim + lowercase ("clean")                                            │
//! │       │                                                                 │
//! │       ├── empty after trim? → no results (not the full list)           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  substring match against, per service:                                 │
//! │    • name          ("Home Deep Cleaning")          ← MATCH!            │
//! │    • description   ("...sofa, kitchen and carpet...")                  │
//! │    • category name ("Cleaning")                    ← MATCH!            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Results in catalog order                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Fixed Derivations
//! - **featured**: discounted services (strike-through price), catalog order
//! - **popular**: rating at or above [`POPULAR_RATING_FLOOR`], most-reviewed
//!   first
//!
//! The data is process-lifetime static; there is no catalog backend today.

use std::sync::OnceLock;

use crate::types::{Category, GeoCoordinates, Location, Service, Worker};
use crate::POPULAR_RATING_FLOOR;

// =============================================================================
// Seed Data
// =============================================================================

/// Recent searches shown before the user has typed anything.
pub const DEFAULT_RECENT_SEARCHES: [&str; 4] = ["AC Repair", "Cleaning", "Plumber", "Electrician"];

/// Recent locations offered on the location picker.
pub const DEFAULT_RECENT_LOCATIONS: [&str; 2] =
    ["Koramangala, Bangalore", "Indiranagar, Bangalore"];

static CATEGORIES: OnceLock<Vec<Category>> = OnceLock::new();
static SERVICES: OnceLock<Vec<Service>> = OnceLock::new();
static WORKERS: OnceLock<Vec<Worker>> = OnceLock::new();

fn cat(id: &str, name: &str, icon: &str, color: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
    }
}

/// Seed row: everything that varies per service, in declaration order.
/// Kept as a tuple so the table below stays one entry per service.
type ServiceRow = (
    &'static str,         // id
    &'static str,         // name
    &'static str,         // category
    &'static str,         // description
    i64,                  // price_cents
    Option<i64>,          // original_price_cents
    f64,                  // rating
    u32,                  // reviews
    &'static str,         // duration
    &'static str,         // image
);

fn svc(row: ServiceRow) -> Service {
    let (
        id,
        name,
        category,
        description,
        price_cents,
        original_price_cents,
        rating,
        reviews,
        duration,
        image,
    ) = row;

    Service {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        price_cents,
        original_price_cents,
        rating,
        reviews,
        duration: duration.to_string(),
        image: image.to_string(),
    }
}

fn category_seed() -> Vec<Category> {
    vec![
        cat("cleaning", "Cleaning", "sparkles", "#4FC3F7"),
        cat("ac-repair", "AC Repair", "snow", "#81D4FA"),
        cat("plumbing", "Plumbing", "water", "#4DB6AC"),
        cat("electrician", "Electrician", "flash", "#FFD54F"),
        cat("painting", "Painting", "color-palette", "#FF8A65"),
        cat("pest-control", "Pest Control", "bug", "#A5D6A7"),
        cat("salon", "Salon at Home", "cut", "#F48FB1"),
        cat("carpentry", "Carpentry", "hammer", "#BCAAA4"),
    ]
}

fn service_seed() -> Vec<Service> {
    // price/original price in paise; rating then review count
    let rows: [ServiceRow; 10] = [
        (
            "home-deep-cleaning",
            "Home Deep Cleaning",
            "cleaning",
            "Full home deep cleaning with sofa, kitchen and carpet shampooing",
            249900,
            Some(349900),
            4.8,
            2312,
            "4-5 hours",
            "https://images.unsplash.com/photo-1581578731548-c64695cc6952?w=400",
        ),
        (
            "bathroom-deep-cleaning",
            "Bathroom Deep Cleaning",
            "cleaning",
            "Scrubbing, descaling and sanitization for up to two bathrooms",
            49900,
            None,
            4.6,
            1430,
            "1 hour",
            "https://images.unsplash.com/photo-1584622650111-993a426fbf0a?w=400",
        ),
        (
            "ac-service",
            "AC Repair & Service",
            "ac-repair",
            "Split and window AC servicing, gas top-up and repairs",
            59900,
            Some(79900),
            4.7,
            1876,
            "45-60 mins",
            "https://images.unsplash.com/photo-1585771724684-38269d6639fd?w=400",
        ),
        (
            "ac-installation",
            "AC Installation",
            "ac-repair",
            "Uninstallation and installation of split AC units",
            129900,
            None,
            4.4,
            642,
            "2-3 hours",
            "https://images.unsplash.com/photo-1621905251918-48416bd8575a?w=400",
        ),
        (
            "plumbing-repair",
            "Plumbing Repair",
            "plumbing",
            "Expert plumber for tap, pipe and leakage repairs",
            29900,
            None,
            4.5,
            980,
            "30-45 mins",
            "https://images.unsplash.com/photo-1607472586893-edb57bdc0e39?w=400",
        ),
        (
            "switch-socket-repair",
            "Switch & Socket Repair",
            "electrician",
            "Switchboards, sockets, fans and light fittings",
            24900,
            None,
            4.6,
            1105,
            "30 mins",
            "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=400",
        ),
        (
            "full-home-painting",
            "Full Home Painting",
            "painting",
            "Walls, ceilings and trim finished with premium emulsion",
            1199900,
            Some(1499900),
            4.3,
            215,
            "3-4 days",
            "https://images.unsplash.com/photo-1562259949-e8e7689d7828?w=400",
        ),
        (
            "general-pest-control",
            "General Pest Control",
            "pest-control",
            "Cockroach, ant and spider treatment for the whole home",
            109900,
            Some(139900),
            4.6,
            765,
            "1-2 hours",
            "https://images.unsplash.com/photo-1569428034239-f9565e32e224?w=400",
        ),
        (
            "salon-classic",
            "Salon Classic at Home",
            "salon",
            "Waxing, facial and mani-pedi by trained beauticians",
            89900,
            None,
            4.9,
            3204,
            "60-90 mins",
            "https://images.unsplash.com/photo-1560066984-138dadb4c035?w=400",
        ),
        (
            "furniture-assembly",
            "Furniture Assembly",
            "carpentry",
            "Flat-pack beds, wardrobes and tables assembled at home",
            44900,
            None,
            4.2,
            330,
            "1 hour",
            "https://images.unsplash.com/photo-1581092160562-40aa08e78837?w=400",
        ),
    ];
    rows.into_iter().map(svc).collect()
}

fn worker_seed() -> Vec<Worker> {
    vec![
        Worker {
            id: "1".to_string(),
            name: "Rahul Sharma".to_string(),
            rating: 4.8,
            jobs_done: 124,
            bid_cents: 45000,
            skills: vec![
                "Pipe Leakage Repair".to_string(),
                "Bathroom Fittings".to_string(),
                "External Drainage".to_string(),
            ],
        },
        Worker {
            id: "2".to_string(),
            name: "Amit Verma".to_string(),
            rating: 4.5,
            jobs_done: 89,
            bid_cents: 40000,
            skills: vec!["Kitchen Plumbing".to_string(), "Tap Repair".to_string()],
        },
        Worker {
            id: "3".to_string(),
            name: "Amit Verma".to_string(),
            rating: 4.5,
            jobs_done: 89,
            bid_cents: 40000,
            skills: vec!["General Maintenance".to_string()],
        },
    ]
}

// =============================================================================
// Catalog Accessors
// =============================================================================

/// All service categories, in home-screen grid order.
pub fn categories() -> &'static [Category] {
    CATEGORIES.get_or_init(category_seed)
}

/// All services, in catalog order.
pub fn services() -> &'static [Service] {
    SERVICES.get_or_init(service_seed)
}

/// The static worker-bid list for the active-job flow.
pub fn nearby_workers() -> &'static [Worker] {
    WORKERS.get_or_init(worker_seed)
}

/// Looks up a category by id.
pub fn category_by_id(id: &str) -> Option<&'static Category> {
    categories().iter().find(|c| c.id == id)
}

/// Looks up a service by id.
///
/// ## Returns
/// * `Some(&Service)` - Service found
/// * `None` - Unknown id (e.g. a stale deep link)
pub fn service_by_id(id: &str) -> Option<&'static Service> {
    services().iter().find(|s| s.id == id)
}

/// All services in a category, catalog order.
pub fn services_in_category(category_id: &str) -> Vec<&'static Service> {
    services()
        .iter()
        .filter(|s| s.category == category_id)
        .collect()
}

// =============================================================================
// Queries
// =============================================================================

/// Searches services by free text.
///
/// ## Behavior
/// - Query is trimmed; an empty query returns **no results** (the search
///   screen shows recent searches instead of the full list)
/// - Case-insensitive substring match against the service name, description,
///   and its category's display name
pub fn search_services(query: &str) -> Vec<&'static Service> {
    let term = query.trim().to_lowercase();

    if term.is_empty() {
        return Vec::new();
    }

    services()
        .iter()
        .filter(|s| {
            if s.name.to_lowercase().contains(&term)
                || s.description.to_lowercase().contains(&term)
            {
                return true;
            }
            category_by_id(&s.category)
                .map(|c| c.name.to_lowercase().contains(&term))
                .unwrap_or(false)
        })
        .collect()
}

/// Discounted services for the featured carousel, catalog order.
pub fn featured_services() -> Vec<&'static Service> {
    services().iter().filter(|s| s.is_discounted()).collect()
}

/// Well-reviewed services for the popular rail.
///
/// ## Behavior
/// Services rated at or above [`POPULAR_RATING_FLOOR`], most-reviewed first.
/// The home screen shows the first four.
pub fn popular_services() -> Vec<&'static Service> {
    let mut popular: Vec<&'static Service> = services()
        .iter()
        .filter(|s| s.rating >= POPULAR_RATING_FLOOR)
        .collect();
    popular.sort_by(|a, b| b.reviews.cmp(&a.reviews));
    popular
}

/// The simulated GPS fix used by "detect my location".
///
/// Real geolocation lives in the frontend; this is the fixture it resolves
/// to today.
pub fn detected_location() -> Location {
    Location {
        address: "HSR Layout, Sector 2, Bangalore, Karnataka 560102".to_string(),
        coordinates: Some(GeoCoordinates {
            lat: 12.9141,
            lng: 77.6411,
        }),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_unique() {
        let mut ids: Vec<&str> = services().iter().map(|s| s.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), services().len());

        let mut cat_ids: Vec<&str> = categories().iter().map(|c| c.id.as_str()).collect();
        cat_ids.sort();
        cat_ids.dedup();
        assert_eq!(cat_ids.len(), categories().len());
    }

    #[test]
    fn test_every_service_has_a_known_category() {
        for service in services() {
            assert!(
                category_by_id(&service.category).is_some(),
                "service {} references unknown category {}",
                service.id,
                service.category
            );
        }
    }

    #[test]
    fn test_service_by_id() {
        let service = service_by_id("ac-service").unwrap();
        assert_eq!(service.name, "AC Repair & Service");

        assert!(service_by_id("does-not-exist").is_none());
    }

    #[test]
    fn test_services_in_category() {
        let cleaning = services_in_category("cleaning");
        assert_eq!(cleaning.len(), 2);
        assert!(cleaning.iter().all(|s| s.category == "cleaning"));

        assert!(services_in_category("no-such-category").is_empty());
    }

    #[test]
    fn test_search_empty_query_returns_nothing() {
        assert!(search_services("").is_empty());
        assert!(search_services("   ").is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let hits = search_services("CLEAN");
        assert!(hits.iter().any(|s| s.name == "Home Deep Cleaning"));

        let same_hits = search_services("clean");
        assert_eq!(hits.len(), same_hits.len());
    }

    #[test]
    fn test_search_matches_description() {
        // "plumber" appears only in the description, not the name or category
        let hits = search_services("plumber");
        assert!(hits.iter().any(|s| s.id == "plumbing-repair"));
    }

    #[test]
    fn test_search_matches_category_display_name() {
        // "ac repair" is the category display name; the slug is "ac-repair"
        let hits = search_services("AC Repair");
        assert!(hits.iter().any(|s| s.id == "ac-service"));
        assert!(hits.iter().any(|s| s.id == "ac-installation"));
    }

    #[test]
    fn test_search_no_match() {
        assert!(search_services("zzzzzz").is_empty());
    }

    #[test]
    fn test_default_recent_searches_all_hit() {
        for term in DEFAULT_RECENT_SEARCHES {
            assert!(
                !search_services(term).is_empty(),
                "canned search {:?} found nothing",
                term
            );
        }
    }

    #[test]
    fn test_featured_services_are_discounted() {
        let featured = featured_services();
        assert!(!featured.is_empty());
        assert!(featured.iter().all(|s| s.is_discounted()));
        assert!(featured.iter().all(|s| s.discount_percent().is_some()));
    }

    #[test]
    fn test_popular_services_sorted_by_reviews() {
        let popular = popular_services();
        assert!(!popular.is_empty());
        assert!(popular.iter().all(|s| s.rating >= POPULAR_RATING_FLOOR));
        assert!(popular.windows(2).all(|w| w[0].reviews >= w[1].reviews));

        // The most-reviewed qualifying service leads the rail
        assert_eq!(popular[0].id, "salon-classic");
    }

    #[test]
    fn test_detected_location_has_coordinates() {
        let loc = detected_location();
        assert!(loc.address.contains("HSR Layout"));
        let coords = loc.coordinates.unwrap();
        assert!((coords.lat - 12.9141).abs() < f64::EPSILON);
        assert!((coords.lng - 77.6411).abs() < f64::EPSILON);
    }

    #[test]
    fn test_nearby_workers_seed() {
        let workers = nearby_workers();
        assert_eq!(workers.len(), 3);
        assert_eq!(workers[0].name, "Rahul Sharma");
        assert_eq!(workers[0].bid_cents, 45000);
        assert!(workers[0].skills.contains(&"Pipe Leakage Repair".to_string()));
    }
}
