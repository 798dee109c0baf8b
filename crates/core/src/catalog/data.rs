use super::{CaseStudy, Project, Stat};

pub(super) static CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        id: 1,
        title: "Bhojohori Manna",
        client: "Bhojohori Manna",
        subtitle: "Turning Culture into Cinematic Storytelling.",
        problem: "The brand wanted visuals that captured their cultural heritage and culinary \
                  artistry, but in a modern, social-first format.",
        approach: "We developed a narrative-first approach, using cinematic lighting, macro shots, \
                   and motion-based storytelling to highlight the authentic cooking process.",
        outcome: "The content led to a 300% increase in Instagram engagement and a significant \
                  boost in brand recall across younger audiences.",
        hero_video_url: Some(
            "https://storage.googleapis.com/aistudio-hosting/media/cinematic-montage-placeholder.mp4",
        ),
        image_url: "https://picsum.photos/seed/case1/1200/800",
        services: &["Cinematography", "Brand Film", "Social Media Content"],
        stats: Some(&[
            Stat { label: "Engagement Increase", value: "300%" },
            Stat { label: "Follower Growth", value: "25K" },
            Stat { label: "Campaign Reach", value: "1.2M" },
        ]),
        gallery: &[
            "https://picsum.photos/seed/resto-g1/800/600",
            "https://picsum.photos/seed/resto-g2/800/600",
            "https://picsum.photos/seed/resto-g3/800/600",
            "https://picsum.photos/seed/resto-g4/800/600",
        ],
    },
    CaseStudy {
        id: 2,
        title: "The Daily Grind",
        client: "The Daily Grind Café",
        subtitle: "From Low Engagement to a Full Content Revamp.",
        problem: "The café had excellent ambience offline but struggled to translate its vibe \
                  into online engagement. Their feed lacked story and aesthetic direction.",
        approach: "We reconstructed their brand narrative around the idea of ‘cozy moments’. The \
                   content included lifestyle shots, customer interactions, and behind-the-scenes \
                   storytelling.",
        outcome: "The café saw 5× profile visits, a 40% follower increase, and improved foot \
                  traffic attributed directly to social media reach.",
        hero_video_url: None,
        image_url: "https://picsum.photos/seed/case2/1200/800",
        services: &["Social Media Management", "Content Strategy", "Reels Production"],
        stats: Some(&[
            Stat { label: "Profile Visits", value: "5×" },
            Stat { label: "Follower Growth", value: "+40%" },
            Stat { label: "Timeframe", value: "3 Months" },
        ]),
        gallery: &[
            "https://picsum.photos/seed/cafe-g1/800/600",
            "https://picsum.photos/seed/cafe-g2/800/600",
            "https://picsum.photos/seed/cafe-g3/800/600",
        ],
    },
    CaseStudy {
        id: 3,
        title: "Phocus Skincare",
        client: "Phocus",
        subtitle: "Clean, Minimal Product Shots + Social-First Launch.",
        problem: "Phocus needed minimal, premium visuals for their new skincare launch, optimized \
                  for ads and e-commerce pages.",
        approach: "We produced clean studio shots, slow-motion macro clips, and lifestyle setups, \
                   using reflective surfaces and soft lighting to emphasize product texture.",
        outcome: "The launch exceeded sales targets by 150% within the first week. Video ads \
                  achieved a CTR twice the industry standard.",
        hero_video_url: None,
        image_url: "https://picsum.photos/seed/case3/1200/800",
        services: &["Product Commercial", "Photography", "Ad Creatives"],
        stats: Some(&[
            Stat { label: "Sales Target", value: "+150%" },
            Stat { label: "Ad CTR", value: "2× Industry Avg." },
        ]),
        gallery: &[
            "https://picsum.photos/seed/prod-g1/800/600",
            "https://picsum.photos/seed/prod-g2/800/600",
            "https://picsum.photos/seed/prod-g3/800/600",
            "https://picsum.photos/seed/prod-g4/800/600",
            "https://picsum.photos/seed/prod-g5/800/600",
        ],
    },
    CaseStudy {
        id: 4,
        title: "Urban Explorer",
        client: "Alex Chen",
        subtitle: "Crafting a Narrative for a Travel Creator.",
        problem: "A travel creator had raw footage but lacked strong narrative flow, causing poor \
                  audience retention.",
        approach: "We collaborated as creative partners, building storytelling structures, \
                   refining pacing, adding immersive sound design, and crafting a cinematic color \
                   style.",
        outcome: "Average view duration increased by 60%, with the creator developing a strong, \
                  recognizable visual identity that attracted brand deals.",
        hero_video_url: None,
        image_url: "https://picsum.photos/seed/case4/1200/800",
        services: &["Video Editing", "Color Grading", "Story Consulting"],
        stats: Some(&[Stat { label: "View Duration", value: "+60%" }]),
        gallery: &[
            "https://picsum.photos/seed/creator-g1/800/600",
            "https://picsum.photos/seed/creator-g2/800/600",
        ],
    },
];

pub(super) static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        case_study_id: 1,
        category: "Restaurants",
        title: "Bhojohori Manna",
        description: "Cinematic food & ambience shoots",
        image_url: "https://picsum.photos/seed/resto1/800/600",
    },
    Project {
        id: 2,
        case_study_id: 2,
        category: "Cafés",
        title: "The Daily Grind",
        description: "Aesthetic lifestyle reels & storytelling",
        image_url: "https://picsum.photos/seed/cafe1/800/600",
    },
    Project {
        id: 3,
        case_study_id: 3,
        category: "Products",
        title: "Phocus Skincare",
        description: "Product commercials & lifestyle reels",
        image_url: "https://picsum.photos/seed/product1/800/600",
    },
    Project {
        id: 4,
        case_study_id: 4,
        category: "Creators",
        title: "Urban Explorer",
        description: "BTS & cinematic storytelling",
        image_url: "https://picsum.photos/seed/creator1/800/600",
    },
    Project {
        id: 5,
        case_study_id: 1,
        category: "Restaurants",
        title: "Spice Route",
        description: "Cultural culinary journey campaign",
        image_url: "https://picsum.photos/seed/resto2/800/600",
    },
    Project {
        id: 6,
        case_study_id: 3,
        category: "Products",
        title: "Aura Watches",
        description: "Luxury product showcase",
        image_url: "https://picsum.photos/seed/product2/800/600",
    },
    Project {
        id: 7,
        case_study_id: 2,
        category: "Cafés",
        title: "Morning Brew",
        description: "From bean to cup narrative",
        image_url: "https://picsum.photos/seed/cafe2/800/600",
    },
    Project {
        id: 8,
        case_study_id: 4,
        category: "Creators",
        title: "Wanderlust Films",
        description: "Travel content series",
        image_url: "https://picsum.photos/seed/creator2/800/600",
    },
];
