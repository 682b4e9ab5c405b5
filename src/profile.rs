//! Static profile content for the home, about, skills, and contact sections.

/// A named skill with a self-assessed level from 0 to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Everything the sections render that does not come from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub banner: &'static str,
    pub welcome: &'static str,
    pub tagline: &'static str,
    pub role: &'static str,
    pub hint: &'static str,
    pub stats: Vec<(&'static str, &'static str)>,
    pub about: Vec<&'static str>,
    pub education: Vec<(&'static str, &'static str)>,
    pub interests: Vec<&'static str>,
    pub skills: Vec<SkillCategory>,
    pub certifications: Vec<&'static str>,
    pub achievements: Vec<&'static str>,
    pub contacts: Vec<ContactLink>,
    pub location: &'static str,
    pub availability: Vec<&'static str>,
}

const BANNER: &str = r"     ██╗ ██████╗ ██╗  ██╗███╗   ██╗    ██████╗  ██████╗ ███████╗
     ██║██╔═══██╗██║  ██║████╗  ██║    ██╔══██╗██╔═══██╗██╔════╝
     ██║██║   ██║███████║██╔██╗ ██║    ██║  ██║██║   ██║█████╗
██   ██║██║   ██║██╔══██║██║╚██╗██║    ██║  ██║██║   ██║██╔══╝
╚█████╔╝╚██████╔╝██║  ██║██║ ╚████║    ██████╔╝╚██████╔╝███████╗
 ╚════╝  ╚═════╝ ╚═╝  ╚═╝╚═╝  ╚═══╝    ╚═════╝  ╚═════╝ ╚══════╝";

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "John Doe",
            banner: BANNER,
            welcome: "Welcome to my terminal portfolio!",
            role: "Full Stack Developer",
            tagline: "passionate about creating amazing digital experiences.",
            hint: "Navigate using the commands below, or scroll to explore.",
            stats: vec![
                ("Years Coding", "5+"),
                ("Projects Built", "50+"),
                ("Technologies", "15+"),
            ],
            about: vec![
                "Hello! I'm John Doe, a passionate full-stack developer with 5+ years of \
                 experience building web applications and digital solutions.",
                "I specialize in modern JavaScript frameworks, cloud architecture, and \
                 user-centric applications that solve real-world problems.",
                "When I'm not coding, you can find me contributing to open-source projects, \
                 writing technical blogs, or exploring new technologies.",
            ],
            education: vec![
                ("2020", "BS Computer Science"),
                ("2021", "AWS Solutions Architect"),
                ("2022", "Kubernetes Administrator"),
            ],
            interests: vec![
                "Open Source Development",
                "Cloud Architecture",
                "DevOps & Automation",
                "Technical Writing",
            ],
            skills: vec![
                SkillCategory {
                    title: "Frontend",
                    skills: vec![
                        Skill { name: "JavaScript/TypeScript", level: 95 },
                        Skill { name: "React/Next.js", level: 90 },
                        Skill { name: "Vue.js", level: 85 },
                        Skill { name: "CSS/Tailwind", level: 92 },
                    ],
                },
                SkillCategory {
                    title: "Backend",
                    skills: vec![
                        Skill { name: "Node.js", level: 88 },
                        Skill { name: "Python", level: 82 },
                        Skill { name: "Go", level: 75 },
                        Skill { name: "PostgreSQL", level: 85 },
                    ],
                },
                SkillCategory {
                    title: "DevOps",
                    skills: vec![
                        Skill { name: "Docker", level: 90 },
                        Skill { name: "Kubernetes", level: 78 },
                        Skill { name: "AWS", level: 85 },
                        Skill { name: "CI/CD", level: 88 },
                    ],
                },
            ],
            certifications: vec![
                "AWS Solutions Architect Professional",
                "Certified Kubernetes Administrator",
                "Google Cloud Professional Developer",
            ],
            achievements: vec![
                "Open Source Contributor (100+ PRs)",
                "Hackathon Winner 2023",
                "Tech Speaker (15+ conferences)",
            ],
            contacts: vec![
                ContactLink { label: "john@example.com", href: "mailto:john@example.com" },
                ContactLink {
                    label: "linkedin.com/in/johndoe",
                    href: "https://linkedin.com/in/johndoe",
                },
                ContactLink { label: "github.com/johndoe", href: "https://github.com/johndoe" },
                ContactLink { label: "twitter.com/johndoe", href: "https://twitter.com/johndoe" },
            ],
            location: "San Francisco, CA",
            availability: vec![
                "Available for new opportunities",
                "PST (UTC-8)",
                "Usually responds within 24h",
            ],
        }
    }
}
