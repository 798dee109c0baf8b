//! Site copy shared by the page templates: navigation, service offerings,
//! testimonials and the studio's contact details.

use serde::Serialize;

pub const STUDIO_NAME: &str = "FOMO Films";
pub const TAGLINE: &str = "Stories That Stick. Visuals That Convert.";
pub const CONTACT_EMAIL: &str = "withsambhab@gmail.com";
pub const BOOKING_URL: &str = "https://calendly.com/withsambhab/15min";
pub const WHATSAPP_URL: &str = "https://wa.me/918777085160";
pub const INSTAGRAM_URL: &str = "https://instagram.com/withsambhab";
pub const YOUTUBE_URL: &str = "https://youtube.com/@withsambhab";
pub const LOCATION: &str = "Kolkata, IN";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub name: &'static str,
    pub path: &'static str,
}

pub static NAV_LINKS: &[NavLink] = &[
    NavLink { name: "Home", path: "/" },
    NavLink { name: "Services", path: "/services" },
    NavLink { name: "Work", path: "/portfolio" },
    NavLink { name: "About", path: "/about" },
    NavLink { name: "Contact", path: "/contact" },
];

/// Title + one-line blurb pairs used by several card grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Blurb {
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
}

/// A service offering on the services page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Offering {
    pub number: &'static str,
    pub title: &'static str,
    pub short_description: &'static str,
    pub long_description: &'static str,
    pub includes: &'static [&'static str],
}

// ---------------------------------------------------------------------------
// Home
// ---------------------------------------------------------------------------

pub static HOME_PROBLEMS: &[Blurb] = &[
    Blurb {
        title: "Our content isn’t converting.",
        text: "We build cinematic assets engineered to convert.",
    },
    Blurb {
        title: "Our page looks dead.",
        text: "We create a cohesive premium visual identity.",
    },
    Blurb {
        title: "We lack a monthly content system.",
        text: "We design a branded plug-and-play content engine.",
    },
    Blurb {
        title: "We get views but no leads.",
        text: "Narrative-first creatives that drive action.",
    },
];

pub static HOME_SERVICES: &[Blurb] = &[
    Blurb {
        title: "End-to-End Production",
        text: "Script, shoot, edit, color. Everything.",
    },
    Blurb {
        title: "Social-First Content",
        text: "Hooks, reels, repurposed edits, strategy.",
    },
    Blurb {
        title: "On-Demand Creative",
        text: "Flexible crew, editors and creative direction.",
    },
];

pub static CLIENT_TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Their storytelling transformed our feed. Engagement and brand recall rose immediately.",
        author: "Café Owner",
    },
    Testimonial {
        quote: "FOMO Films shipped visuals that felt premium. We saw measurable lift in launch week.",
        author: "Phocus Brand Team",
    },
    Testimonial {
        quote: "My videos now have cinematic pacing and clarity. The edit elevated my channel.",
        author: "Travel YouTuber",
    },
];

// ---------------------------------------------------------------------------
// About
// ---------------------------------------------------------------------------

pub static PHILOSOPHY: &[Blurb] = &[
    Blurb {
        title: "Emotions First",
        text: "We create content that connects with people on a human level, evoking genuine feeling.",
    },
    Blurb {
        title: "Aesthetics with Purpose",
        text: "Every frame is intentional: lighting, composition, and color crafted to reinforce the story.",
    },
    Blurb {
        title: "Narrative-First",
        text: "A strong narrative is the foundation of all our work and the driving force behind every visual choice.",
    },
];

pub static PROCESS_STEPS: &[Blurb] = &[
    Blurb {
        title: "Deep Dive & Strategy",
        text: "We understand your brand deeply (your story, audience, and goals) to build a strong content strategy.",
    },
    Blurb {
        title: "Creative Direction",
        text: "Vision comes alive through moodboards, scripts, and shot lists crafted with precision.",
    },
    Blurb {
        title: "Production",
        text: "We capture cinematic footage using pro lighting, composition, and storytelling-first direction.",
    },
    Blurb {
        title: "Post-Production",
        text: "Color grading, editing, sound, and polish that transform raw footage into a compelling narrative.",
    },
];

// ---------------------------------------------------------------------------
// Services
// ---------------------------------------------------------------------------

pub static OFFERINGS: &[Offering] = &[
    Offering {
        number: "01",
        title: "End-to-End Production",
        short_description: "From script to screen, we handle everything.",
        long_description: "Perfect for brands wanting a fully-managed, cinematic final product. We \
                           transform your raw idea into a complete, polished piece ready for any \
                           platform.",
        includes: &[
            "Scripting & Concept Development",
            "Shot List & Moodboards",
            "Cinematography & Lighting",
            "Editing & Color Grading",
            "Music Licensing & Voice Over",
        ],
    },
    Offering {
        number: "02",
        title: "Social Media Management",
        short_description: "A monthly content system built for consistent growth.",
        long_description: "We manage and build your entire social content pipeline: Reels, \
                           Carousels, Stories, Analytics & Strategy. Designed for brands that want \
                           consistent growth.",
        includes: &[
            "Content Calendar & Strategy",
            "Monthly Reels + Carousels",
            "Copywriting & High-converting Captions",
            "Analytics & Performance Insights",
            "Ad Boosting Strategy",
        ],
    },
    Offering {
        number: "03",
        title: "On-Demand Services",
        short_description: "Flexible support for specific creative tasks.",
        long_description: "Ideal for creators or teams who need professional assistance on demand. \
                           Pick only what you need, no extra fluff.",
        includes: &[
            "Hourly Camera Crew",
            "Editing Packages",
            "Script Consultation",
            "Color Grading Services",
            "Creative Direction",
        ],
    },
];

pub const SHOWREEL_URL: &str =
    "https://storage.googleapis.com/aistudio-hosting/media/cinematic-montage-placeholder.mp4";

// ---------------------------------------------------------------------------
// Creator collab
// ---------------------------------------------------------------------------

pub static CREATOR_SERVICES: &[Blurb] = &[
    Blurb {
        title: "Cinematic Editing",
        text: "Vlog-style editing with a focus on narrative, pacing, and emotional impact.",
    },
    Blurb {
        title: "Color Grading",
        text: "Professional color correction and grading to give your videos a unique, cinematic look.",
    },
    Blurb {
        title: "Content Strategy",
        text: "Story direction, channel visuals, and content planning designed to elevate your brand.",
    },
    Blurb {
        title: "On-Demand Camera",
        text: "Need a professional camera operator for a project? Hourly booking available.",
    },
];

pub static CREATOR_TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Their editing transformed my vlogs. The pacing and color grading are next level. \
                My audience noticed the quality jump immediately.",
        author: "Lifestyle Vlogger",
    },
    Testimonial {
        quote: "Finally found a team that gets storytelling. They helped me structure my travel \
                series and the final product was breathtaking.",
        author: "Travel YouTuber",
    },
    Testimonial {
        quote: "Fast, professional, and incredibly creative. They took my raw footage and turned \
                it into something truly cinematic.",
        author: "Fitness Creator",
    },
];

// ---------------------------------------------------------------------------
// Product shoot
// ---------------------------------------------------------------------------

/// Image URL + alt text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Shot {
    pub src: &'static str,
    pub alt: &'static str,
}

pub static PRODUCT_GALLERY: &[Shot] = &[
    Shot { src: "https://picsum.photos/seed/prod1/500/800", alt: "Clean product shot" },
    Shot { src: "https://picsum.photos/seed/prod2/500/300", alt: "Lifestyle product placement" },
    Shot { src: "https://picsum.photos/seed/prod3/500/500", alt: "Packaging shot" },
    Shot { src: "https://picsum.photos/seed/prod4/500/500", alt: "Ad-ready content" },
    Shot { src: "https://picsum.photos/seed/prod5/500/800", alt: "Reel-style product shot" },
    Shot { src: "https://picsum.photos/seed/prod6/500/300", alt: "Product in use" },
    Shot { src: "https://picsum.photos/seed/prod7/500/300", alt: "Branding visuals" },
    Shot { src: "https://picsum.photos/seed/prod8/500/500", alt: "Studio shot" },
    Shot { src: "https://picsum.photos/seed/prod9/500/800", alt: "Detailed product macro" },
];

pub static PRODUCT_USE_CASES: &[&str] = &[
    "Skincare Brands",
    "Lifestyle & Wellness",
    "Packaging Visuals",
    "Instagram Ads",
    "Website Hero Shots",
];

/// Numbered picsum seeds, e.g. `bts1`..`bts4`.
pub fn seeded_images(seed: &str, count: usize, width: u32, height: u32) -> Vec<String> {
    (1..=count)
        .map(|i| format!("https://picsum.photos/seed/{seed}{i}/{width}/{height}"))
        .collect()
}
