//! Copy and fixed data for every section of the page.

pub const BRAND: &str = "WASHINGTON";
pub const BRAND_ACCENT: &str = "ADVERT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "About", href: "#about" },
    NavLink { label: "Services", href: "#services" },
    NavLink { label: "Work", href: "#work" },
    NavLink { label: "Contact", href: "#contact" },
];

pub const NAV_CTA: NavLink = NavLink {
    label: "Start Project",
    href: "#contact",
};

pub struct Hero {
    pub kicker: &'static str,
    pub headline: [&'static str; 3],
    pub lede: &'static str,
    pub cta: NavLink,
}

pub const HERO: Hero = Hero {
    kicker: "Digital Marketing Agency",
    headline: ["PREMIUM", "DIGITAL", "EXPERIENCES"],
    lede: "We craft cinematic web journeys for brands that dare to be different. \
           Combining strategy, design, and motion into one seamless narrative.",
    cta: NavLink {
        label: "Discover More",
        href: "#about",
    },
};

pub const ABOUT_HEADLINE: (&str, &str) = ("We don't just build websites.", "We build worlds.");

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "In a crowded digital landscape, standing out requires more than just good design. \
     It requires a story. A feeling. An experience that resonates deeply with your audience.",
    "Washington Advert bridges the gap between art and technology. We use cutting-edge 3D web \
     technologies to create immersive environments that captivate users and drive conversion.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Globe,
    Layers,
    Zap,
    ArrowRight,
    Sun,
    Moon,
}

impl Icon {
    pub fn name(self) -> &'static str {
        match self {
            Self::Globe => "globe",
            Self::Layers => "layers",
            Self::Zap => "zap",
            Self::ArrowRight => "arrow-right",
            Self::Sun => "sun",
            Self::Moon => "moon",
        }
    }
}

pub struct Service {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES_KICKER: &str = "Our Expertise";
pub const SERVICES_HEADLINE: &str = "Designed for Impact";

pub const SERVICES: [Service; 3] = [
    Service {
        icon: Icon::Globe,
        title: "Web Experience",
        description: "Immersive 3D websites, landing pages, and web applications that push the \
                      boundaries of the browser.",
    },
    Service {
        icon: Icon::Layers,
        title: "Brand Strategy",
        description: "Comprehensive digital strategies that align your visual identity with your \
                      business goals.",
    },
    Service {
        icon: Icon::Zap,
        title: "Performance",
        description: "Optimized for speed and conversion without sacrificing visual fidelity or \
                      interactivity.",
    },
];

pub struct Work {
    pub image_url: &'static str,
    pub title: &'static str,
    pub category: &'static str,
}

pub const WORKS_HEADLINE: &str = "Selected Works";

pub const WORKS: [Work; 2] = [
    Work {
        image_url: "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?w=800&q=80",
        title: "Apex Tower",
        category: "Real Estate",
    },
    Work {
        image_url: "https://images.unsplash.com/photo-1550684848-fac1c5b4e853?w=800&q=80",
        title: "Flux Energy",
        category: "Tech Startup",
    },
];

pub const CONTACT_HEADLINE: &str = "Start Your Journey";
pub const CONTACT_LEDE: &str = "Ready to transform your digital presence? Let's talk.";
pub const CONTACT_PLACEHOLDERS: (&str, &str, &str) =
    ("John Doe", "john@example.com", "Tell us about your project...");

pub const FOOTER_TAGLINE: &str =
    "We create premium digital experiences that define brands. \
     Based in Washington, operating globally.";
pub const SOCIALS: [&str; 4] = ["Instagram", "Twitter", "LinkedIn", "Behance"];
pub const ADDRESS_LINES: [&str; 2] = ["123 Innovation Drive", "Washington, DC 20001"];
pub const CONTACT_EMAIL: &str = "hello@washingtonadvert.com";
pub const LEGAL_LINKS: [&str; 2] = ["Privacy Policy", "Terms of Service"];
