// Profile
pub const PROFILE_NAME: &str = "Dikshit Darji";

pub const GREETING: [&str; 3] = [
    "Hey there! 👋 I'm Dikshit Darji",
    "I'm a Full Stack Developer passionate about creating robust and scalable web applications.",
    "Type 'more' to see what I can help you with!",
];

pub const SKILLS: [&str; 10] = [
    "HTML",
    "CSS",
    "JavaScript",
    "React",
    "Node",
    "Express",
    "MongoDB",
    "C",
    "C++",
    "Docker",
];

// Reply text
pub const MORE_HEADER: &str = "Here are some keywords you can type to learn more about me:";
pub const SKILLS_HEADER: &str = "My Technical Skills:";
pub const SKILLS_DELIMITER: &str = " • ";
pub const RESUME_LEAD_IN: &str = "You can download my resume here:";
pub const RESUME_DOWNLOAD: &str = "📄 Click to download resume";
pub const EDUCATION: &str = "🎓 Education:\n\n• B.Tech from Techno India NJR Institute of Technology, Udaipur\n• 12th from Pratap Sr. Sec. School Chawand\n• 10th from Pratap Sr. Sec. School Chawand";
pub const ADDRESS: &str = "📍 Location:\nParsad, Udaipur, Rajasthan";
pub const CONTACT: &str = "📱 Contact Information:\n\n• LinkedIn: https://www.linkedin.com/in/dikshit-darji-0a0989249/\n• Phone: +91 9828418225\n• Email: darjidikshit30@gmail.com";
pub const PROJECTS: &str =
    "🚀 Check out my projects on GitHub:\nhttps://github.com/DikshitDarji?tab=repositories";
pub const FALLBACK: &str = "I didn't understand that. Type 'more' to see available commands.";

// Typing simulation
pub const DEFAULT_TYPING_DELAY_MIN_MS: u64 = 1000;
pub const DEFAULT_TYPING_DELAY_MAX_MS: u64 = 2000;

// Resume asset
pub const DEFAULT_RESUME_PATH: &str = "resume.pdf";
pub const DEFAULT_RESUME_FILE_NAME: &str = "DikshitDarji_Resume.pdf";

// UI
pub const TICK_RATE_MS: u64 = 120;
pub const TYPING_DOTS: [&str; 4] = ["·  ", "•· ", "••·", " ••"];
pub const DOWNLOAD_BUTTON_LABEL: &str = "[ ⬇ Download Resume ]";
pub const READ_RECEIPT: &str = "✓✓";
