//! Static page content rendered by the components.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// Phrases cycled by the typing animation.
pub const PHRASES: [&str; 4] = ["Computer Engineer", "AI/ML Engineer", "Deep Learning Expert", "Software Developer"];

/// CV opened by the download button.
pub const CV_URL: &str = "https://drive.google.com/file/d/1m3cGP_CMBYMqP0kOKR3zG10IqWAlzFon/view";

pub const PROFILE_IMAGE: &str = "/images/profile.jpg";
pub const ABOUT_IMAGE: &str = "/images/about.jpg";

pub struct NavLink {
    pub id: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: [NavLink; 7] = [
    NavLink { id: "home", label: "Home" },
    NavLink { id: "about", label: "About" },
    NavLink { id: "education", label: "Education" },
    NavLink { id: "skills", label: "Skills" },
    NavLink { id: "experience", label: "Experience" },
    NavLink { id: "projects", label: "Projects" },
    NavLink { id: "contact", label: "Contact" },
];

pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
    /// Bar fill in percent.
    pub progress: u8,
}

pub const SKILLS: [Skill; 8] = [
    Skill { name: "Python", icon: "bx bxl-python", progress: 95 },
    Skill { name: "C / C++", icon: "bx bx-code-alt", progress: 85 },
    Skill { name: "PyTorch", icon: "bx bx-brain", progress: 90 },
    Skill { name: "TensorFlow", icon: "bx bx-network-chart", progress: 80 },
    Skill { name: "JavaScript", icon: "bx bxl-javascript", progress: 80 },
    Skill { name: "SQL", icon: "bx bx-data", progress: 75 },
    Skill { name: "Docker", icon: "bx bxl-docker", progress: 70 },
    Skill { name: "Git", icon: "bx bxl-git", progress: 85 },
];

pub struct TimelineEntry {
    pub period: &'static str,
    pub title: &'static str,
    pub place: &'static str,
    pub detail: &'static str,
}

pub const TIMELINE: [TimelineEntry; 3] = [
    TimelineEntry {
        period: "2021 - 2025",
        title: "B.Sc. Computer Engineering",
        place: "University",
        detail: "Focus on machine learning, embedded systems, and computer architecture.",
    },
    TimelineEntry {
        period: "2019 - 2021",
        title: "Higher Secondary",
        place: "College",
        detail: "Science track with mathematics and physics.",
    },
    TimelineEntry {
        period: "2017 - 2019",
        title: "Secondary School",
        place: "School",
        detail: "Science group.",
    },
];

pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub summary: &'static str,
}

pub const EXPERIENCE: [Experience; 3] = [
    Experience {
        role: "Machine Learning Engineer",
        company: "AI Lab",
        period: "2024 - Present",
        summary: "Training and deploying deep learning models for vision and language tasks.",
    },
    Experience {
        role: "Research Assistant",
        company: "University Robotics Group",
        period: "2023 - 2024",
        summary: "Built perception pipelines and evaluated model robustness.",
    },
    Experience {
        role: "Software Developer Intern",
        company: "Tech Startup",
        period: "2022",
        summary: "Shipped backend features and internal tooling.",
    },
];

pub struct Achievement {
    pub icon: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
}

pub const ACHIEVEMENTS: [Achievement; 3] = [
    Achievement { icon: "bx bx-trophy", title: "Hackathon Winner", detail: "First place in a national AI hackathon." },
    Achievement { icon: "bx bx-book-open", title: "Published Paper", detail: "Peer-reviewed work on efficient image models." },
    Achievement { icon: "bx bx-medal", title: "Dean's List", detail: "Recognized for academic excellence." },
];

/// Filter buttons: `(data-filter, label)`.
pub const FILTERS: [(&str, &str); 4] = [("all", "All"), ("ai", "AI/ML"), ("web", "Web"), ("embedded", "Embedded")];

pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
}

pub const PROJECTS: [Project; 6] = [
    Project {
        title: "Medical Image Segmentation",
        category: "ai",
        summary: "U-Net variant for tumor segmentation in MRI scans.",
        tags: &["PyTorch", "Computer Vision"],
    },
    Project {
        title: "Sentiment Analysis Service",
        category: "ai",
        summary: "Transformer-based classifier served behind a REST API.",
        tags: &["NLP", "FastAPI"],
    },
    Project {
        title: "Portfolio Website",
        category: "web",
        summary: "This site: responsive layout, themes, and animations.",
        tags: &["Rust", "WASM"],
    },
    Project {
        title: "Task Tracker",
        category: "web",
        summary: "Collaborative task board with live updates.",
        tags: &["JavaScript", "SQL"],
    },
    Project {
        title: "Smart Irrigation Controller",
        category: "embedded",
        summary: "Soil-moisture driven watering on a microcontroller.",
        tags: &["C", "IoT"],
    },
    Project {
        title: "Line Following Robot",
        category: "embedded",
        summary: "PID-controlled robot with IR sensor array.",
        tags: &["C++", "Control"],
    },
];

pub struct HomeStat {
    /// `data-target` value.
    pub target: &'static str,
    pub label: &'static str,
}

pub const HOME_STATS: [HomeStat; 3] = [
    HomeStat { target: "15", label: "Projects" },
    HomeStat { target: "3", label: "Years Coding" },
    HomeStat { target: "3.5", label: "GPA" },
];

/// Duration of each home stat counter.
pub const HOME_STAT_DURATION_MS: f64 = 2000.0;

pub struct ContactStat {
    pub id: &'static str,
    pub label: &'static str,
    pub target: f64,
    pub duration_ms: f64,
}

pub const CONTACT_STATS: [ContactStat; 3] = [
    ContactStat { id: "projectCount", label: "Projects Completed", target: 15.0, duration_ms: 2000.0 },
    ContactStat { id: "coffeeCount", label: "Cups of Coffee", target: 515.0, duration_ms: 2500.0 },
    ContactStat { id: "codeLines", label: "Lines of Code", target: 515_151.0, duration_ms: 3000.0 },
];
