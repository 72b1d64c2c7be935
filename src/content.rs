//! Static content of the portfolio page.

pub struct Profile {
    pub name: &'static str,
    pub initials: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub headline: &'static str,
    pub about: &'static [&'static str],
    pub email: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
}

pub struct Experience {
    pub company: &'static str,
    pub role: &'static str,
    pub duration: &'static str,
    pub responsibilities: &'static [&'static str],
}

pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub demo: &'static str,
    pub github: &'static str,
}

impl Project {
    /// The site's own entry links back into the page instead of a new tab.
    pub fn opens_in_new_tab(&self) -> bool {
        self.id != "portfolio"
    }
}

pub static PROFILE: Profile = Profile {
    name: "Arbaaz Mansuri",
    initials: "AM",
    title: "Frontend Engineer",
    tagline: "Building the future with code. Specializing in modern web technologies and scalable solutions.",
    headline: "Developer & Problem Solver",
    about: &[
        "I'm a passionate full-stack developer with expertise in building modern, scalable web applications. With a strong foundation in both frontend and backend technologies, I love creating seamless user experiences backed by robust server architecture.",
        "My journey in software development has equipped me with a diverse skill set and the ability to adapt to new technologies quickly. I thrive in collaborative environments and am always eager to tackle challenging projects that push the boundaries of what's possible.",
    ],
    email: "arbaazmansuri09@gmail.com",
    github: "https://github.com/arbaaz1999",
    linkedin: "https://www.linkedin.com/in/arbaaz1999/",
};

pub const SKILLS: &[&str] = &[
    "HTML5",
    "CSS3",
    "Javascript",
    "React",
    "Next.js",
    "TailwindCSS",
    "TypeScript",
    "Node.js",
    "Express.js",
    "MongoDB",
    "PostgreSQL",
    "GraphQL",
];

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        company: "CapxAI",
        role: "Associate Software Engineer",
        duration: "August-2023 - Dec-2024",
        responsibilities: &[
            "Developed a Telegram Mini-App from scratch using Next.js, taking full ownership of UI development. Utilized TailwindCSS and NextUI to build a responsive and interactive user interface, and integrated backend APIs seamlessly using Axios for dynamic data handling.",
            "Optimized application load performance by leveraging IndexedDB to cache user data locally. Fetched user data from IndexedDB on initial load to minimize latency, while asynchronously retrieving and updating fresh data from the API in the background. This strategy significantly enhanced perceived load time and overall user experience.",
            "Implemented a seamless token refresh mechanism in a Next.js application using Axios interceptors, enabling automatic retrieval of new access tokens in the background. This approach ensures uninterrupted user sessions and significantly enhances the overall user experience by eliminating visible authentication errors.",
            "Implemented advanced web optimization techniques, including lazy loading, code splitting, preloading/prefetching, dynamic image serving, and dead code elimination, enhancing performance and user experience.",
            "Integrated Google Analytics to track user activities.",
            "Collaborated with a team of skilled engineers to develop and deliver high-quality, scalable web applications and POCs using modern technologies like HTML, CSS, JavaScript, TypeScript, ReactJS, and Next.js.",
        ],
    },
    Experience {
        company: "Codiotic Technologies Pvt. Ltd.",
        role: "Junior Software Engineer",
        duration: "Nov-2022 - Apr-2022",
        responsibilities: &[
            "Acquired hands-on experience with the MERN stack – Gained practical knowledge in ReactJS, NodeJS, ExpressJS, and MongoDB, building full-stack applications from scratch.",
            "Developed RESTful APIs using NodeJS, ExpressJS, and MongoDB, and built responsive, interactive user interfaces with ReactJS and TailwindCSS for seamless front-end experiences.",
        ],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        id: "portfolio",
        title: "Personal Portfolio",
        description: "A stunning, futuristic personal portfolio showcasing full-stack development expertise with a cyberpunk-inspired dark theme. Fully responsive, with neon-glow aesthetics, smooth animations, and interactive elements.",
        tech: &["Rust", "Axum", "Askama", "Lettre"],
        demo: "#",
        github: "https://github.com/arbaaz1999/portfolio",
    },
    Project {
        id: "ai_image_editor",
        title: "AI Image Editor",
        description: "Pixxel is a subscription-based SaaS AI Image Editor built with Next.js (App Router). It provides a modern, browser-based canvas editor with AI-powered transformations and traditional image-editing features so users can crop, resize, add text, adjust colors, replace or remove backgrounds, extend canvases, perform AI edits and enhancements, and export final assets.",
        tech: &[
            "NextJS",
            "Javascript / React",
            "FabricJS",
            "Imagekit.io",
            "Clerk Auth",
            "CovexDB",
            "TailwindCSS",
            "ShadcnUI",
            "Context API",
        ],
        demo: "https://pixxel-teal.vercel.app/",
        github: "https://github.com/arbaaz1999/pixxel",
    },
];
