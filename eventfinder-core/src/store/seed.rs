//! Sample events inserted into a brand-new database.

use crate::event::{Category, NewEvent};

#[allow(clippy::too_many_arguments)]
fn sample(
    name: &str,
    date: &str,
    time: &str,
    category: Category,
    district: &str,
    place: &str,
    description: &str,
    lat: f64,
    lng: f64,
    price: Option<f64>,
) -> NewEvent {
    NewEvent {
        name: name.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        category,
        district: district.to_string(),
        place: place.to_string(),
        description: description.to_string(),
        lat,
        lng,
        paid: price.is_some(),
        price: price.unwrap_or(0.0),
    }
}

/// Community events around Kerala, already in canonical date/time form.
pub fn seed_events() -> Vec<NewEvent> {
    use Category::*;

    vec![
        sample("Rock Concert", "March 10, 2026", "7:00 PM", Music, "Ernakulam", "Kochi", "Live rock band performance at City Hall.", 9.9312, 76.2673, None),
        sample("Football Match", "March 15, 2026", "3:00 PM", Sports, "Thrissur", "Thrissur City", "District-level football tournament.", 10.5276, 76.2144, None),
        sample("AI Conference", "March 20, 2026", "10:00 AM", Tech, "Ernakulam", "Kochi", "Annual AI & ML summit for developers.", 9.9816, 76.2998, Some(500.0)),
        sample("Jazz Night", "March 22, 2026", "8:00 PM", Music, "Kozhikode", "Kozhikode City", "Intimate jazz session at the Calicut Club.", 11.2588, 75.7804, Some(200.0)),
        sample("Basketball Tournament", "March 25, 2026", "2:00 PM", Sports, "Thiruvananthapuram", "Thiruvananthapuram City", "State-level basketball championship.", 8.5241, 76.9366, None),
        sample("Startup Meetup", "March 28, 2026", "5:00 PM", Tech, "Ernakulam", "Kochi", "Networking event for Kerala entrepreneurs.", 10.0159, 76.3419, None),
        sample("Classical Dance Show", "March 30, 2026", "6:30 PM", Dance, "Thrissur", "Guruvayur", "Bharatanatyam & Mohiniyattam recital.", 10.5941, 76.0387, Some(150.0)),
        sample("Street Art Festival", "April 5, 2026", "11:00 AM", Art, "Kozhikode", "Kozhikode City", "Open-air mural & graffiti fest.", 11.2453, 75.7913, None),
        sample("Munnar Music Retreat", "April 10, 2026", "4:00 PM", Music, "Idukki", "Munnar", "Acoustic music weekend in the hills.", 10.0892, 77.0595, Some(300.0)),
        sample("Backwater Sports Meet", "April 12, 2026", "9:00 AM", Sports, "Alappuzha", "Alappuzha City", "Snake boat race and water sports carnival.", 9.4981, 76.3388, None),
        sample("Photography Workshop", "April 18, 2026", "10:00 AM", Art, "Palakkad", "Palakkad City", "Landscape photography masterclass.", 10.7867, 76.6548, Some(250.0)),
        sample("Tech Hackathon", "April 22, 2026", "9:00 AM", Tech, "Kannur", "Kannur City", "24-hour student hackathon.", 11.8745, 75.3704, None),
        sample("Folk Music Evening", "April 25, 2026", "6:00 PM", Music, "Wayanad", "Kalpetta", "Traditional Kerala folk instruments showcase.", 11.6085, 76.0820, None),
        sample("Yoga & Wellness Camp", "April 28, 2026", "7:00 AM", Sports, "Malappuram", "Malappuram City", "Sunrise yoga & meditation retreat.", 11.0730, 76.0740, Some(100.0)),
        sample("Kathakali Performance", "May 2, 2026", "7:30 PM", Dance, "Thrissur", "Thrissur City", "Classical Kathakali at the town auditorium.", 10.5276, 76.2144, Some(180.0)),
    ]
}
