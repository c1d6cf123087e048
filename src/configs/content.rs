use serde::Serialize;

pub const PROFILE_NAME: &str = "Yatharth Chauhan";
pub const PROFILE_IMAGE_URL: &str =
    "https://raw.githubusercontent.com/YatharthChauhan2362/prod-public-images/refs/heads/main/yatharthchauhan.jpg";
pub const TAGLINE: &str = "Portfolio Coming Soon";
pub const STATUS_TEXT: &str = "Something amazing is in the works...";
pub const BOOKING_URL: &str = "https://topmate.io/yatharthchauhan/1161502";
pub const YOUTUBE_SUBSCRIBE_URL: &str =
    "https://www.youtube.com/@yatricloud?sub_confirmation=1";
pub const CONTACT_EMAIL: &str = "contact@yatharthchauhan.me";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub icon: &'static str,
    pub url: &'static str,
    pub label: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 9] = [
    SocialLink {
        icon: "fa-brands fa-linkedin",
        url: "https://linkedin.com/in/yatharth-chauhan",
        label: "LinkedIn",
    },
    SocialLink {
        icon: "fa-brands fa-youtube",
        url: "https://www.youtube.com/@yatricloud?sub_confirmation=1&sub_confirmation=1",
        label: "YouTube",
    },
    SocialLink {
        icon: "fa-brands fa-whatsapp",
        url: "https://whatsapp.com/channel/0029VakdAHIFHWq60yHA1Q0s",
        label: "WhatsApp",
    },
    SocialLink {
        icon: "fa-brands fa-github",
        url: "https://github.com/YatharthChauhan2362",
        label: "GitHub",
    },
    SocialLink {
        icon: "fa-brands fa-medium",
        url: "https://medium.com/@YatharthChauhan",
        label: "Medium",
    },
    SocialLink {
        icon: "fa-brands fa-instagram",
        url: "https://instagram.com/yatharthchauhan_yc",
        label: "Instagram",
    },
    SocialLink {
        icon: "fa-brands fa-twitter",
        url: "https://twitter.com/YatharthStories",
        label: "Twitter",
    },
    SocialLink {
        icon: "fa-brands fa-discord",
        url: "https://discord.com/invite/92warrKq9j",
        label: "Discord",
    },
    SocialLink {
        icon: "fa-solid fa-link",
        url: "https://linktr.ee/yatharthchauhan",
        label: "Linktree",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
}

// Positions are viewport percentages; triangles ignore `size` and are drawn
// at a fixed size by the stylesheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Shape {
    pub kind: ShapeKind,
    pub size: u32,
    pub x: &'static str,
    pub y: &'static str,
}

pub const BACKGROUND_SHAPES: [Shape; 8] = [
    Shape { kind: ShapeKind::Circle, size: 150, x: "5%", y: "15%" },
    Shape { kind: ShapeKind::Square, size: 120, x: "85%", y: "25%" },
    Shape { kind: ShapeKind::Triangle, size: 150, x: "15%", y: "75%" },
    Shape { kind: ShapeKind::Circle, size: 90, x: "75%", y: "85%" },
    Shape { kind: ShapeKind::Square, size: 60, x: "45%", y: "45%" },
    Shape { kind: ShapeKind::Triangle, size: 120, x: "95%", y: "55%" },
    Shape { kind: ShapeKind::Circle, size: 80, x: "30%", y: "30%" },
    Shape { kind: ShapeKind::Square, size: 100, x: "60%", y: "70%" },
];
