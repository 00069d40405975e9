//! The built-in event catalog the directory starts with.

use crate::model::{Event, EventType};

fn event(
    id: &str,
    name: &str,
    description: &str,
    date: &str,
    time: &str,
    location: &str,
    college: &str,
    event_type: EventType,
    link: &str,
    image_url: &str,
) -> Event {
    Event {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        date: date.into(),
        time: time.into(),
        location: location.into(),
        college: college.into(),
        event_type,
        link: link.into(),
        image_url: Some(image_url.into()),
    }
}

/// The eight launch events, in catalog order.
pub fn seed_events() -> Vec<Event> {
    vec![
        event(
            "1",
            "AI & Machine Learning Workshop",
            "Learn the fundamentals of AI and ML with hands-on exercises using TensorFlow and PyTorch.",
            "2025-06-15",
            "10:00 AM - 4:00 PM",
            "CS Building, Room 105",
            "MIT",
            EventType::Workshop,
            "https://example.edu/ai-workshop",
            "https://images.unsplash.com/photo-1591453089816-0fbb971b454c?auto=format&fit=crop&w=1770&q=80",
        ),
        event(
            "2",
            "Blockchain Hackathon",
            "A 48-hour hackathon focused on building innovative blockchain applications for real-world problems.",
            "2025-07-20",
            "9:00 AM (48 hours)",
            "Innovation Center",
            "Stanford",
            EventType::Hackathon,
            "https://example.edu/blockchain-hackathon",
            "https://images.unsplash.com/photo-1516321318423-f06f85e504b3?auto=format&fit=crop&w=1770&q=80",
        ),
        event(
            "3",
            "Future of Quantum Computing",
            "Tech talk by Dr. Jane Smith on the latest advancements in quantum computing and its implications.",
            "2025-06-05",
            "6:00 PM - 8:00 PM",
            "Physics Auditorium",
            "Caltech",
            EventType::TechTalk,
            "https://example.edu/quantum-talk",
            "https://images.unsplash.com/photo-1635070041078-e363dbe005cb?auto=format&fit=crop&w=1770&q=80",
        ),
        event(
            "4",
            "Web3 Development Workshop",
            "Hands-on workshop covering the basics of Web3 development using Ethereum and Solidity.",
            "2025-06-25",
            "1:00 PM - 5:00 PM",
            "Engineering Building, Room 302",
            "UC Berkeley",
            EventType::Workshop,
            "https://example.edu/web3-workshop",
            "https://images.unsplash.com/photo-1526374965328-7f61d4dc18c5?auto=format&fit=crop&w=1770&q=80",
        ),
        event(
            "5",
            "Cybersecurity Challenge",
            "A competitive event where participants tackle real-world security challenges and ethical hacking scenarios.",
            "2025-07-10",
            "10:00 AM - 6:00 PM",
            "Computer Science Building",
            "CMU",
            EventType::Hackathon,
            "https://example.edu/cybersecurity-challenge",
            "https://images.unsplash.com/photo-1550751827-4bd374c3f58b?auto=format&fit=crop&w=1770&q=80",
        ),
        event(
            "6",
            "Product Design in Tech",
            "Tech talk by leading product designers from major tech companies discussing the future of product design.",
            "2025-06-20",
            "5:30 PM - 7:30 PM",
            "Design Studio",
            "RISD",
            EventType::TechTalk,
            "https://example.edu/design-talk",
            "https://images.unsplash.com/photo-1523240795612-9a054b0db644?auto=format&fit=crop&w=1770&q=80",
        ),
        event(
            "7",
            "IoT Innovation Hackathon",
            "Build innovative IoT solutions for smart cities, homes, or healthcare applications.",
            "2025-08-05",
            "9:00 AM (36 hours)",
            "Engineering Innovation Center",
            "Georgia Tech",
            EventType::Hackathon,
            "https://example.edu/iot-hackathon",
            "https://images.unsplash.com/photo-1518770660439-4636190af475?auto=format&fit=crop&w=1770&q=80",
        ),
        event(
            "8",
            "Cloud Computing Workshop",
            "Learn to deploy applications using AWS, Azure, and Google Cloud with this hands-on workshop.",
            "2025-06-30",
            "11:00 AM - 3:00 PM",
            "Tech Hub, Room 405",
            "University of Washington",
            EventType::Workshop,
            "https://example.edu/cloud-workshop",
            "https://images.unsplash.com/photo-1544197150-b99a580bb7a8?auto=format&fit=crop&w=1770&q=80",
        ),
    ]
}
