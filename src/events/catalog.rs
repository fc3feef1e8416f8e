use crate::models::event::EventCategory;

/// Sports events as `(id, display name)`, in listing order
pub const SPORTS: [(&str, &str); 16] = [
    ("chess", "Chess"),
    ("badminton", "Badminton"),
    ("basketball", "Basketball"),
    ("table-tennis", "Table Tennis"),
    ("carrom", "Carrom"),
    ("pool", "Pool"),
    ("throwball", "Throwball"),
    ("foosball", "Foosball"),
    ("volleyball", "Volleyball"),
    ("esports-fifa", "E-Sports FIFA"),
    ("esports-valo", "E-Sports Valo"),
    ("box-cricket", "Box Cricket"),
    ("football", "Football"),
    ("pickleball", "Pickleball"),
    ("squash", "Squash"),
    ("lawn-tennis", "Lawn Tennis"),
];

pub const CULTURAL: [(&str, &str); 8] = [
    ("group-skit", "Group Skit"),
    ("group-dance", "Group Dance"),
    ("group-musical", "Group Musical"),
    ("roast-comedy", "Roast Comedy"),
    ("quiz", "Quiz"),
    ("rotating-art", "Rotating Art"),
    ("meme-wars", "Meme Wars"),
    ("beg-borrow-steal", "Beg, Borrow, Steal"),
];

pub fn all() -> impl Iterator<Item = (&'static str, &'static str, EventCategory)> {
    SPORTS
        .iter()
        .map(|&(id, name)| (id, name, EventCategory::Sports))
        .chain(CULTURAL.iter().map(|&(id, name)| (id, name, EventCategory::Cultural)))
}
