use crate::models::*;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn skill(name: &str, level: u8, icon: &str) -> Skill {
    Skill {
        name: name.to_string(),
        level,
        icon: icon.to_string(),
    }
}

fn link(name: &str, href: &str, external: bool) -> FooterLink {
    FooterLink {
        name: name.to_string(),
        href: href.to_string(),
        external,
    }
}

const LINKEDIN: &str = "https://www.linkedin.com/in/abil-p-raju-471765211/";
const GITHUB: &str = "https://github.com/abilpraju-aot";
const CREDLY: &str =
    "https://www.credly.com/badges/88c0973b-1958-4737-91d9-82277390495f/linked_in_profile";
const EMAIL: &str = "abilraju97@gmail.com";

/// The portfolio content the site ships with.
pub fn builtin() -> Portfolio {
    Portfolio {
        profile: profile(),
        skills: skills(),
        project_categories: vec![
            CategoryTab::new("all", "All Projects"),
            CategoryTab::new("fullstack", "Full Stack"),
            CategoryTab::new("frontend", "Frontend"),
            CategoryTab::new("backend", "Backend"),
        ],
        projects: projects(),
        timeline: timeline(),
        contact: vec![
            ContactInfo {
                label: "Email".to_string(),
                value: EMAIL.to_string(),
                link: format!("mailto:{EMAIL}"),
            },
            ContactInfo {
                label: "Phone".to_string(),
                value: "+91 9061471885".to_string(),
                link: "tel:+919061471885".to_string(),
            },
            ContactInfo {
                label: "Location".to_string(),
                value: "Trivandrum, Kerala".to_string(),
                link: "https://maps.google.com/?q=Trivandrum,Kerala,India".to_string(),
            },
        ],
        social: vec![
            SocialLink {
                name: "LinkedIn".to_string(),
                url: LINKEDIN.to_string(),
            },
            SocialLink {
                name: "GitHub".to_string(),
                url: GITHUB.to_string(),
            },
            SocialLink {
                name: "AWS Certification".to_string(),
                url: CREDLY.to_string(),
            },
        ],
        footer: vec![
            FooterColumn {
                title: "Quick Links".to_string(),
                links: vec![
                    link("Home", "#home", false),
                    link("About", "#about", false),
                    link("Skills", "#skills", false),
                    link("Projects", "#projects", false),
                    link("Experience", "#experience", false),
                    link("Contact", "#contact", false),
                ],
            },
            FooterColumn {
                title: "Connect".to_string(),
                links: vec![
                    link("LinkedIn", LINKEDIN, true),
                    link("GitHub", GITHUB, true),
                    link("AWS Certification", CREDLY, true),
                    link("Email", &format!("mailto:{EMAIL}"), true),
                ],
            },
            FooterColumn {
                title: "Services".to_string(),
                links: vec![
                    link("Web Development", "#contact", false),
                    link("UI/UX Design", "#contact", false),
                    link("Consulting", "#contact", false),
                    link("Code Review", "#contact", false),
                ],
            },
        ],
    }
}

fn profile() -> Profile {
    Profile {
        name: "Abil P Raju".to_string(),
        roles: strings(&[
            "Full-Stack Developer",
            "React.js Developer",
            "Python Developer",
            "AWS Certified Developer",
            "Open Source Contributor",
        ]),
        tagline: "AWS Certified Developer specializing in full-stack development with React.js, \
                  Python, and cloud technologies. Contributing to open-source projects and \
                  building scalable enterprise solutions."
            .to_string(),
        bio: strings(&[
            "I'm a passionate Full-Stack Developer with over 4 years of experience at \
             Aot-technologies, specializing in enterprise-level applications and open-source \
             contributions. Currently working on formsflow.ai, an innovative platform for \
             creating forms and workflows that serves thousands of users.",
            "My expertise spans across modern web technologies including React.js, Python, \
             Flask, and AWS cloud services. Currently learning Angular and OpenShift while \
             expanding my knowledge in Python development. I'm particularly passionate about \
             microservices architecture, CI/CD implementation, and creating scalable solutions \
             that enhance user experience and business efficiency.",
        ]),
        education: "Bachelor of Computer Applications graduate from MG University with a CGPA \
                    of 7.8. AWS Certified Developer with additional certifications in Red Hat \
                    Container Platform and Oracle Cloud Infrastructure. Continuously expanding \
                    expertise through hands-on enterprise projects and open-source contributions."
            .to_string(),
        cv_url: Some(
            "https://drive.google.com/file/d/1Y422lTQttBTo1-O52t-z3GlPwXwJMvfo/view?usp=sharing"
                .to_string(),
        ),
        stats: vec![
            Stat {
                number: "4+".to_string(),
                label: "Years Experience".to_string(),
            },
            Stat {
                number: "15+".to_string(),
                label: "Technologies".to_string(),
            },
            Stat {
                number: "1".to_string(),
                label: "AWS Certifications".to_string(),
            },
            Stat {
                number: "100%".to_string(),
                label: "Project Success".to_string(),
            },
        ],
        values: vec![
            Value {
                title: "Clean Code".to_string(),
                description: "Writing maintainable, scalable, and efficient code that stands \
                              the test of time."
                    .to_string(),
            },
            Value {
                title: "Innovation".to_string(),
                description: "Constantly exploring new technologies and creative solutions to \
                              complex problems."
                    .to_string(),
            },
            Value {
                title: "Performance".to_string(),
                description: "Optimizing applications for speed, accessibility, and \
                              exceptional user experience."
                    .to_string(),
            },
            Value {
                title: "Passion".to_string(),
                description: "Genuinely passionate about technology and its power to make a \
                              positive impact."
                    .to_string(),
            },
        ],
        learning: "Technology never stops evolving, and neither do I. I'm constantly exploring \
                   new frameworks, tools, and methodologies to stay at the forefront of web \
                   development. Currently focusing on advanced microservices architecture, \
                   Kubernetes orchestration, and enhancing my AWS cloud expertise."
            .to_string(),
    }
}

fn skills() -> Vec<SkillCategory> {
    vec![
        SkillCategory {
            key: "frontend".to_string(),
            title: "Frontend".to_string(),
            icon: "🎨".to_string(),
            skills: vec![
                skill("React.js", 95, "⚛️"),
                skill("JavaScript", 93, "🟨"),
                skill("Redux", 88, "🔄"),
                skill("jQuery", 85, "📜"),
                skill("HTML", 95, "🌐"),
                skill("CSS", 90, "🎨"),
            ],
        },
        SkillCategory {
            key: "backend".to_string(),
            title: "Backend".to_string(),
            icon: "⚙️".to_string(),
            skills: vec![
                skill("Python", 92, "🐍"),
                skill("Flask", 90, "🌶️"),
                skill("Express.js", 88, "🚂"),
                skill("PostgreSQL", 85, "🐘"),
                skill("NoSQL", 82, "🍃"),
                skill("WebSocket", 80, "🔗"),
            ],
        },
        SkillCategory {
            key: "tools".to_string(),
            title: "Tools & DevOps".to_string(),
            icon: "🛠️".to_string(),
            skills: vec![
                skill("Git", 95, "📝"),
                skill("Docker", 90, "🐳"),
                skill("CI/CD", 92, "🔄"),
                skill("Nginx", 85, "🌐"),
                skill("Microservices", 88, "🔧"),
                skill("API Integration", 90, "🔗"),
            ],
        },
        SkillCategory {
            key: "cloud".to_string(),
            title: "Cloud & AWS".to_string(),
            icon: "☁️".to_string(),
            skills: vec![
                skill("AWS", 95, "☁️"),
                skill("EC2", 90, "🖥️"),
                skill("S3", 88, "🗄️"),
                skill("CloudFront", 85, "🌐"),
                skill("Route53", 82, "🗺️"),
                skill("Elastic IP", 80, "🔌"),
            ],
        },
    ]
}

fn projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "Formsflow.ai Platform".to_string(),
            category: "fullstack".to_string(),
            description: "Open-source platform for creating forms and workflows with \
                          multi-tenancy support"
                .to_string(),
            long_description: "A comprehensive low-code platform for building forms and \
                               workflows, serving thousands of users globally. Implemented \
                               micro-frontend architecture, CI/CD pipelines, multi-tenancy \
                               support, and SSO integration. Enhanced security with Keycloak \
                               configurations and developed custom connectors for workflow \
                               automation."
                .to_string(),
            image: Some(
                "https://images.unsplash.com/photo-1551434678-e076c223a692?auto=format&fit=crop&w=800&q=80"
                    .to_string(),
            ),
            tech: strings(&["React.js", "Python", "Flask", "Microservices", "Docker", "AWS"]),
            live_url: Some("https://formsflow.ai".to_string()),
            github_url: Some("https://github.com/AOT-Technologies/forms-flow-ai".to_string()),
            date: "2021-Present".to_string(),
            featured: true,
        },
        Project {
            id: 2,
            title: "Houseboat Booking Platform".to_string(),
            category: "fullstack".to_string(),
            description: "Feature-rich houseboat booking platform with admin and user management"
                .to_string(),
            long_description: "A comprehensive booking platform built with ASP.NET and MySQL, \
                               featuring dual user roles. Admin users can manage houseboat \
                               listings and booking records, while general users can browse, \
                               book, and manage their reservations. Implemented secure \
                               authentication, input validation, session management, and \
                               optimized database queries for enhanced performance."
                .to_string(),
            image: Some(
                "https://images.unsplash.com/photo-1544551763-46a013bb70d5?auto=format&fit=crop&w=800&q=80"
                    .to_string(),
            ),
            tech: strings(&["ASP.NET", "MySQL", "JavaScript", "HTML/CSS", "Bootstrap"]),
            live_url: None,
            github_url: None,
            date: "2021".to_string(),
            featured: true,
        },
        Project {
            id: 3,
            title: "Custom Form.io Components Package".to_string(),
            category: "frontend".to_string(),
            description: "NPM package with customized Form.io components and themes".to_string(),
            long_description: "Developed and published a custom NPM package featuring enhanced \
                               Form.io components with advanced theming capabilities. \
                               Implemented CI/CD pipeline for automated testing and deployment \
                               to AWS CloudFront with S3. The package provides reusable \
                               components with customizable themes to meet specific branding \
                               requirements, improving user experience and development \
                               efficiency."
                .to_string(),
            image: Some(
                "https://images.unsplash.com/photo-1618477247222-acbdb0e159b3?auto=format&fit=crop&w=800&q=80"
                    .to_string(),
            ),
            tech: strings(&["React.js", "Form.io", "NPM", "AWS CloudFront", "S3", "CI/CD"]),
            live_url: None,
            github_url: None,
            date: "2022".to_string(),
            featured: false,
        },
        Project {
            id: 4,
            title: "Camunda-Workato Integration Connector".to_string(),
            category: "backend".to_string(),
            description: "Custom connector for seamless workflow automation between platforms"
                .to_string(),
            long_description: "Developed a custom connector in Camunda Modeler to integrate \
                               with Workato, enabling seamless workflow automation across \
                               external applications. This integration allows for automated \
                               data flow and process orchestration between different enterprise \
                               systems, significantly improving operational efficiency and \
                               reducing manual intervention."
                .to_string(),
            image: Some(
                "https://images.unsplash.com/photo-1558494949-ef010cbdcc31?auto=format&fit=crop&w=800&q=80"
                    .to_string(),
            ),
            tech: strings(&["Camunda", "Workato", "Java", "REST APIs", "Microservices"]),
            live_url: None,
            github_url: None,
            date: "2022".to_string(),
            featured: false,
        },
    ]
}

fn timeline() -> Timeline {
    Timeline {
        work: vec![TimelineEntry {
            id: 1,
            title: "Software Engineer".to_string(),
            organization: "Aot-technologies".to_string(),
            duration: "May 2021 - Present".to_string(),
            points: strings(&[
                "Implemented micro-frontend architecture for formsflow.ai v2 release",
                "Established robust CI/CD processes for testing and publishing packages",
                "Successfully released NPM package with customized Form.io components",
                "Implemented multi-tenancy support enhancing scalability and security",
                "Integrated SSO with formsflow.ai and enhanced security with Keycloak",
                "Developed custom Camunda-Workato connector for workflow automation",
            ]),
            technologies: strings(&["React.js", "Python", "Flask", "AWS", "Docker", "Microservices"]),
        }],
        education: vec![TimelineEntry {
            id: 1,
            title: "Bachelor of Computer Applications".to_string(),
            organization: "MG University".to_string(),
            duration: "Jun 2018 - Apr 2021".to_string(),
            points: strings(&[
                "Completed BCA with focus on software development, web technologies, and database management.",
                "Strong foundation in programming and system design with CGPA: 7.8/10.0",
            ]),
            technologies: strings(&[
                "Programming Fundamentals",
                "Web Development",
                "Database Management",
                "Software Engineering",
            ]),
        }],
        certifications: vec![
            TimelineEntry {
                id: 1,
                title: "AWS Certified Developer – Associate".to_string(),
                organization: "Amazon Web Services".to_string(),
                duration: "Valid until Feb 2028".to_string(),
                points: strings(&[
                    "Demonstrated expertise in developing and maintaining applications on the AWS platform.",
                    "Expertise in serverless application development and cloud-native architecture",
                ]),
                technologies: strings(&["AWS", "Cloud Computing", "Serverless", "DevOps"]),
            },
            TimelineEntry {
                id: 2,
                title: "Container Platform Application Deployment".to_string(),
                organization: "Red Hat".to_string(),
                duration: "Issued Sep 2022".to_string(),
                points: strings(&[
                    "Specialized certification in container platform technologies and application deployment strategies.",
                    "Expertise in OpenShift platform management and container orchestration",
                ]),
                technologies: strings(&["Containers", "OpenShift", "Kubernetes", "DevOps"]),
            },
            TimelineEntry {
                id: 3,
                title: "IBM AI Engineering Professional Certificate".to_string(),
                organization: "Coursera (IBM)".to_string(),
                duration: "Completed 2024".to_string(),
                points: strings(&[
                    "Comprehensive AI engineering program covering machine learning, deep learning, and AI model deployment.",
                    "Hands-on experience with TensorFlow, PyTorch, and cloud-based AI services for building scalable AI solutions",
                ]),
                technologies: strings(&[
                    "AI Engineering",
                    "Machine Learning",
                    "Deep Learning",
                    "TensorFlow",
                    "PyTorch",
                    "Cloud AI",
                ]),
            },
        ],
    }
}
