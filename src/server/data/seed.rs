//! Built-in catalog used when the store holds nothing for a collection.

use entity::prelude::*;

fn affiliation(id: &str, name: &str, location: &str, short_name: &str) -> Affiliation {
    Affiliation {
        id: id.to_string(),
        name: name.to_string(),
        short_name: short_name.to_string(),
        location: location.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn listing(
    id: &str,
    name: &str,
    affiliation_id: &str,
    price_range: &str,
    distance: &str,
    rating: f64,
    recommended: bool,
    amenities: &[&str],
) -> Listing {
    Listing {
        id: id.to_string(),
        name: name.to_string(),
        affiliation_id: affiliation_id.to_string(),
        price_range: price_range.to_string(),
        distance: distance.to_string(),
        rating,
        image: format!("https://picsum.photos/seed/hostel{}/800/600", &id[1..]),
        recommended,
        amenities: amenities.iter().map(|a| a.to_string()).collect(),
    }
}

pub fn affiliations() -> Vec<Affiliation> {
    vec![
        affiliation("1", "Makerere University", "Kampala", "MAK"),
        affiliation("2", "Kyambogo University", "Kampala", "KYU"),
        affiliation("3", "Mbarara University of Science & Tech", "Mbarara", "MUST"),
        affiliation("4", "Makerere Business School", "Nakawa", "MUBS"),
        affiliation("5", "Gulu University", "Gulu", "GULU"),
        affiliation("6", "Uganda Christian University", "Mukono", "UCU"),
    ]
}

pub fn listings() -> Vec<Listing> {
    vec![
        listing(
            "h1",
            "Douglas Villa",
            "1",
            "UGX 800k - 1.2M",
            "200m from Main Gate",
            4.8,
            true,
            &["WiFi", "Shuttle", "Security"],
        ),
        listing(
            "h2",
            "Olympia Hostel",
            "1",
            "UGX 1.2M - 2.5M",
            "500m from Law Faculty",
            4.9,
            true,
            &["Swimming Pool", "Gym", "WiFi"],
        ),
        listing(
            "h3",
            "Banda Executive",
            "2",
            "UGX 600k - 900k",
            "100m from West Gate",
            4.2,
            false,
            &["Canteen", "WiFi"],
        ),
        listing(
            "h4",
            "Valley View",
            "4",
            "UGX 1.0M - 1.5M",
            "300m from Nakawa",
            4.5,
            true,
            &["Shuttle", "Restaurant"],
        ),
        listing(
            "h5",
            "Skyline Premium",
            "6",
            "UGX 1.5M+",
            "50m from Mukono Gate",
            4.7,
            true,
            &["AC", "Gym", "WiFi"],
        ),
    ]
}

pub fn posts() -> Vec<Post> {
    vec![
        Post {
            id: "p1".to_string(),
            kind: PostKind::News,
            title: "New Library Wings Open".to_string(),
            description: "The long-awaited expansion of the Main Library is finally complete."
                .to_string(),
            date: "Oct 24, 2023".to_string(),
            image: Some("https://picsum.photos/seed/news1/600/400".to_string()),
        },
        Post {
            id: "p2".to_string(),
            kind: PostKind::Event,
            title: "Freshers Ball 2024".to_string(),
            description: "Join us for the biggest welcome party of the semester featuring top Ugandan artists.".to_string(),
            date: "Nov 12, 2023".to_string(),
            image: Some("https://picsum.photos/seed/event1/600/400".to_string()),
        },
        Post {
            id: "p3".to_string(),
            kind: PostKind::Job,
            title: "Data Analyst Internship".to_string(),
            description:
                "MTN Uganda is looking for proactive student interns for the IT department."
                    .to_string(),
            date: "Deadline: Nov 30".to_string(),
            image: None,
        },
    ]
}

pub fn profiles() -> Vec<Profile> {
    vec![
        Profile {
            id: "s1".to_string(),
            name: "Namono Sarah".to_string(),
            affiliation: "Makerere University".to_string(),
            achievement: "Developed a low-cost irrigation system for rural farmers.".to_string(),
            image: "https://picsum.photos/seed/student1/400/400".to_string(),
            field: "Engineering".to_string(),
        },
        Profile {
            id: "s2".to_string(),
            name: "Okello John".to_string(),
            affiliation: "Kyambogo University".to_string(),
            achievement: "Won the National Debate Championship for three consecutive years."
                .to_string(),
            image: "https://picsum.photos/seed/student2/400/400".to_string(),
            field: "Social Sciences".to_string(),
        },
    ]
}
