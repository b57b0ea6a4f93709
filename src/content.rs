//! Static page copy and catalogs.

use crate::projects::{Project, ProjectCategory};

pub const OWNER_NAME: &str = "Shahroze Baig";
pub const OWNER_ROLE: &str = "AI/ML Student & Developer";
pub const BRAND: &str = "Portfolio";
pub const PORTRAIT: &str = "/Shahroze.jpg";

pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { name: "Home", href: "#home" },
    NavItem { name: "About", href: "#about" },
    NavItem { name: "Skills", href: "#skills" },
    NavItem { name: "Projects", href: "#projects" },
    NavItem { name: "Contact", href: "#contact" },
];

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "I am an enthusiastic and highly motivated AI/ML student at Keshav Memorial Engineering College, passionate about using technology to solve real-world problems. With a blend of software development and machine learning experience, I enjoy developing efficient systems that are both impactful and scalable.",
    "My interests span from automating daily tasks and securing digital systems to building intelligent applications. I value collaboration, innovation, and continuous learning, and aim to contribute meaningfully in dynamic tech environments.",
];

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub accent: &'static str,
}

pub const ABOUT_STATS: &[Stat] = &[
    Stat { value: "8.14", label: "Current CGPA", accent: "accent-indigo" },
    Stat { value: "3+", label: "Projects", accent: "accent-purple" },
    Stat { value: "2+", label: "Certifications", accent: "accent-pink" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub percentage: u8,
    pub color: &'static str,
}

impl Skill {
    /// Bar width once revealed; out-of-range values are clamped.
    pub fn width_percent(&self, revealed: bool) -> u8 {
        if revealed {
            self.percentage.min(100)
        } else {
            0
        }
    }
}

pub struct SkillGroup {
    pub title: &'static str,
    pub badge: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILL_COLUMNS: [&[SkillGroup]; 2] = [
    &[
        SkillGroup {
            title: "Programming Languages",
            badge: "badge-blue",
            skills: &[
                Skill { name: "Python", percentage: 90, color: "bar-blue" },
                Skill { name: "Java", percentage: 85, color: "bar-red" },
                Skill { name: "C", percentage: 80, color: "bar-gray" },
            ],
        },
        SkillGroup {
            title: "Web Technologies",
            badge: "badge-orange",
            skills: &[
                Skill { name: "HTML & CSS", percentage: 85, color: "bar-orange" },
                Skill { name: "JavaScript", percentage: 80, color: "bar-yellow" },
                Skill { name: "React JS", percentage: 75, color: "bar-cyan" },
                Skill { name: "React Native", percentage: 70, color: "bar-sky" },
            ],
        },
    ],
    &[
        SkillGroup {
            title: "Databases",
            badge: "badge-green",
            skills: &[
                Skill { name: "MySQL", percentage: 85, color: "bar-blue" },
                Skill { name: "MongoDB", percentage: 80, color: "bar-green" },
            ],
        },
        SkillGroup {
            title: "Machine Learning & Data Science",
            badge: "badge-purple",
            skills: &[
                Skill { name: "Scikit-learn", percentage: 85, color: "bar-orange" },
                Skill { name: "Pandas", percentage: 90, color: "bar-purple" },
                Skill { name: "NumPy", percentage: 88, color: "bar-blue" },
                Skill { name: "OpenCV", percentage: 75, color: "bar-green" },
            ],
        },
    ],
];

pub const LEARNING_FOCUS: &[&str] = &["Deep Learning", "Computer Vision", "NLP", "AWS"];

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "WhatsApp Birthday Wishing Bot",
        description: "Automates birthday wishes via WhatsApp using a scheduler and user data from a file. Enhances personal or professional communication by ensuring timely, personalized messages.",
        image: "/Birthday-Wishing-Bot.jpg",
        tags: &["Python", "Pandas", "pywhatkit", "Datetime"],
        github_url: "https://github.com/shahrozebaig/Whatsapp-Birthday-bot",
        live_url: "#",
        category: ProjectCategory::Automation,
    },
    Project {
        id: 2,
        title: "Automated Android Malware Detection",
        description: "Built an ensemble machine learning model using Random Forest, SVM, and Gradient Boosting to detect malware in Android applications. Used performance metrics like accuracy and F1-score for model evaluation.",
        image: "/android-malware.jpg",
        tags: &["Python", "Scikit-learn", "Pandas", "NumPy"],
        github_url: "#",
        live_url: "#",
        category: ProjectCategory::Ml,
    },
    Project {
        id: 3,
        title: "Early Detection of Alzheimer's Disease",
        description: "Created a full-stack web app for predicting Alzheimer's at an early stage. Doctors can input patient data and receive results powered by machine learning.",
        image: "/Alzheimers-Disease.jpg",
        tags: &["Python", "MongoDB", "React JS", "Machine Learning", "OpenCV"],
        github_url: "https://github.com/shahrozebaig/Alzheimer-Detection",
        live_url: "#",
        category: ProjectCategory::Web,
    },
];

pub struct ContactItem {
    pub icon: &'static str,
    pub title: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub const CONTACT_ITEMS: &[ContactItem] = &[
    ContactItem {
        icon: "✉",
        title: "Email",
        value: "shahrozeb98@gmail.com",
        href: "mailto:shahrozeb98@gmail.com",
    },
    ContactItem {
        icon: "☎",
        title: "Phone",
        value: "+91 9392713232",
        href: "tel:+919392713232",
    },
    ContactItem {
        icon: "⌖",
        title: "Location",
        value: "Hyderabad, India",
        href: "#",
    },
];

pub struct SocialLink {
    pub label: &'static str,
    pub short: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "LinkedIn",
        short: "in",
        href: "https://www.linkedin.com/in/shahroze-baig-692264290",
    },
    SocialLink {
        label: "Instagram",
        short: "ig",
        href: "https://www.instagram.com/shahrozebaig18/",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn nav_targets_are_unique_anchors() {
        let hrefs: HashSet<&str> = NAV_ITEMS.iter().map(|item| item.href).collect();
        assert_eq!(hrefs.len(), NAV_ITEMS.len());
        assert!(NAV_ITEMS.iter().all(|item| item.href.starts_with('#')));
    }

    #[test]
    fn project_ids_are_unique() {
        let ids: HashSet<u32> = PROJECTS.iter().map(|project| project.id).collect();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn skill_width_is_zero_until_revealed() {
        let skill = Skill { name: "Rust", percentage: 140, color: "bar-orange" };
        assert_eq!(skill.width_percent(false), 0);
        assert_eq!(skill.width_percent(true), 100);
    }

    #[test]
    fn catalog_percentages_are_in_range() {
        for column in SKILL_COLUMNS {
            for group in column {
                for skill in group.skills {
                    assert!(skill.percentage <= 100, "{} out of range", skill.name);
                }
            }
        }
    }
}
