//! Static résumé content consumed by every section renderer.
//!
//! Swapping the tables in this module swaps everything the page shows;
//! no component holds content of its own.

pub struct PersonInfo {
    pub name: &'static str,
    pub full_name: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub social: SocialLinks,
}

pub struct SocialLinks {
    pub github: &'static str,
    pub linkedin: &'static str,
    pub leetcode: &'static str,
}

impl PersonInfo {
    /// Initials used as the header wordmark ("Havya Sree" -> "HS").
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

pub struct Summary {
    pub short: &'static str,
    pub full: &'static str,
    pub highlights: &'static [&'static str],
}

pub struct EducationEntry {
    pub degree: &'static str,
    pub field: &'static str,
    pub institution: &'static str,
    pub year: &'static str,
    pub score: &'static str,
    pub highlight: bool,
}

pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub highlights: &'static [&'static str],
    pub impact: &'static str,
    pub tech: &'static [&'static str],
    pub category: &'static str,
    pub featured: bool,
}

pub struct SkillGroup {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum AchievementKind {
    Competition,
    Leadership,
    Certification,
}

impl AchievementKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Competition => "competition",
            Self::Leadership => "leadership",
            Self::Certification => "certification",
        }
    }
}

pub struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
    pub kind: AchievementKind,
    pub highlight: bool,
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub suffix: &'static str,
}

/// One navigable content section: stable anchor id plus the nav label.
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

/// Ordered anchor list the navigation depends on. The hero is not
/// navigable and deliberately absent.
pub static SECTIONS: [Section; 5] = [
    Section { id: "about", label: "01" },
    Section { id: "projects", label: "02" },
    Section { id: "skills", label: "03" },
    Section { id: "achievements", label: "04" },
    Section { id: "contact", label: "05" },
];

pub static PERSON: PersonInfo = PersonInfo {
    name: "Havya Sree",
    full_name: "Kuppam Havya Sree",
    title: "AI & Web Developer",
    tagline: "Building intelligent, data-driven systems",
    email: "havyasree123@gmail.com",
    phone: "+91-8247514424",
    social: SocialLinks {
        github: "https://github.com",
        linkedin: "https://linkedin.com",
        leetcode: "https://leetcode.com/u/Havya_Sree/",
    },
};

pub static SUMMARY: Summary = Summary {
    short: "Aspiring AI and Web Developer with hands-on experience in Django, Machine Learning, and Data Visualization.",
    full: "Passionate about building intelligent, data-driven systems and integrating AI into real-world applications. Eager to contribute to innovative environments that foster continuous learning and impactful problem-solving.",
    highlights: &["AI Integration", "Data-Driven Systems", "Real-World Impact"],
};

pub static EDUCATION: [EducationEntry; 3] = [
    EducationEntry {
        degree: "Bachelor of Technology",
        field: "Information Science and Engineering (ISE)",
        institution: "RV Institute of Technology and Management",
        year: "2023 - Present",
        score: "9.07 CGPA",
        highlight: true,
    },
    EducationEntry {
        degree: "12th Board",
        field: "Telangana State Board of Intermediate Education",
        institution: "Pinegrove JR College, Hyderabad",
        year: "2021-23",
        score: "98.0%",
        highlight: false,
    },
    EducationEntry {
        degree: "10th Board",
        field: "Board of Secondary Education, AP",
        institution: "Sreevani EM High School, Tadipatri",
        year: "2021",
        score: "10.0 CGPA",
        highlight: false,
    },
];

pub static PROJECTS: [Project; 3] = [
    Project {
        id: "competency-diagnostic",
        title: "Smart Competency Diagnostic",
        subtitle: "AI-Driven Candidate Profiling System",
        description: "Engineered an AI-driven system to analyze candidate competencies and calculate profile scores using job-specific skill weightage.",
        highlights: &[
            "Integrated Django backend with REST APIs",
            "Implemented ML algorithms for competency mapping",
            "Interactive web interface with real-time evaluation",
            "Dynamic tracking of candidate evaluation status",
        ],
        impact: "Improved recruiter efficiency and user transparency",
        tech: &["Django", "REST APIs", "Machine Learning", "Python"],
        category: "AI/ML",
        featured: true,
    },
    Project {
        id: "ai-trip-planner",
        title: "AI Trip Planner",
        subtitle: "Personalized Travel Intelligence",
        description: "Developed an AI-powered travel planner generating personalized itineraries based on user preferences, time, and budget constraints.",
        highlights: &[
            "Google Maps API for optimized routing",
            "OpenAI API for destination recommendations",
            "Real-time adaptive itinerary planning",
            "Live tracking and dynamic adjustments",
        ],
        impact: "Higher route accuracy and user satisfaction",
        tech: &["Python", "Google Maps API", "OpenAI API", "Real-time Processing"],
        category: "AI/ML",
        featured: true,
    },
    Project {
        id: "placement-analysis",
        title: "Student Placement Analysis",
        subtitle: "Data Visualization Platform",
        description: "Built a professional analytics platform combining Django and Tableau for visualizing student placement performance and insights.",
        highlights: &[
            "Interactive Tableau dashboards",
            "Placement rates and recruiter analysis",
            "Cross-departmental performance insights",
            "Professional data reporting",
        ],
        impact: "Enhanced institutional data reporting accuracy",
        tech: &["Django", "Tableau", "Data Analytics", "Python"],
        category: "Data Viz",
        featured: true,
    },
];

pub static SKILL_GROUPS: [SkillGroup; 6] = [
    SkillGroup {
        title: "Languages",
        items: &["Java", "Python", "C", "JavaScript"],
    },
    SkillGroup {
        title: "Machine Learning & AI",
        items: &["Scikit-learn", "TensorFlow", "OpenCV", "MediaPipe", "NLP"],
    },
    SkillGroup {
        title: "Database & Cloud",
        items: &["MySQL", "MongoDB", "SQLite"],
    },
    SkillGroup {
        title: "Web Development",
        items: &["Django", "HTML", "CSS", "React", "Tailwind CSS", "Spring Boot", "Flask"],
    },
    SkillGroup {
        title: "DevOps & Tools",
        items: &["Git", "GitHub"],
    },
    SkillGroup {
        title: "Computer Science Fundamentals",
        items: &["DSA (Java)", "Computer Networks", "Operating Systems", "OOPS", "DBMS"],
    },
];

pub static ACHIEVEMENTS: [Achievement; 2] = [
    Achievement {
        title: "Smart India Hackathon 2024 Finalist",
        description: "Led the team to successful completion at the national level",
        kind: AchievementKind::Competition,
        highlight: true,
    },
    Achievement {
        title: "PowerPoint with AI Certificate",
        description: "Obtained certification from Skill Nation",
        kind: AchievementKind::Certification,
        highlight: false,
    },
];

pub static STATS: [Stat; 4] = [
    Stat { value: "9.12", label: "CGPA", suffix: "" },
    Stat { value: "3", label: "Major Projects", suffix: "+" },
    Stat { value: "98", label: "12th Score", suffix: "%" },
    Stat { value: "10", label: "10th CGPA", suffix: "" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn section_ids_are_unique_and_non_empty() {
        let mut seen = HashSet::new();
        for section in &SECTIONS {
            assert!(!section.id.is_empty());
            assert!(seen.insert(section.id), "duplicate section id {}", section.id);
        }
    }

    #[test]
    fn project_ids_are_unique_and_non_empty() {
        let mut seen = HashSet::new();
        for project in &PROJECTS {
            assert!(!project.id.is_empty());
            assert!(seen.insert(project.id), "duplicate project id {}", project.id);
        }
    }

    #[test]
    fn ordered_tables_are_populated() {
        assert!(!EDUCATION.is_empty());
        assert!(!PROJECTS.is_empty());
        assert!(!SKILL_GROUPS.is_empty());
        assert!(!ACHIEVEMENTS.is_empty());
        assert!(!STATS.is_empty());
        for group in &SKILL_GROUPS {
            assert!(!group.items.is_empty(), "empty skill group {}", group.title);
        }
        for project in &PROJECTS {
            assert!(!project.highlights.is_empty());
            assert!(!project.tech.is_empty());
        }
    }

    #[test]
    fn initials_join_first_letters() {
        assert_eq!(PERSON.initials(), "HS");
    }
}
