// src/config/consts.rs

// Net config
pub const CERTIFICATES_URL: &str = "https://totem-consultancy-alpha.vercel.app/api/certificates";

// Local store (debug log only; no data is cached)
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const CSV_FILE: &str = "student_certificates.csv";
pub const PDF_FILE: &str = "student_certificates.pdf";
pub const EXPORT_HEADERS: [&str; 6] = ["ID", "First Name", "Last Name", "From Date", "To Date", "Created At"];

// PDF
pub const PDF_TITLE: &str = "Student Certificates";
pub const PDF_HEAD_FILL: (u8, u8, u8) = (41, 128, 185);
pub const PDF_STRIPE_FILL: (u8, u8, u8) = (245, 245, 245);
pub const PDF_TITLE_SIZE: f32 = 16.0;
pub const PDF_SUBTITLE_SIZE: f32 = 10.0;
pub const PDF_TABLE_FONT_SIZE: f32 = 8.0;

// GUI
pub const WINDOW_TITLE: &str = "Student Certifications";
pub const WINDOW_W: f32 = 1100.0;
pub const WINDOW_H: f32 = 700.0;
pub const SEARCH_HINT: &str = "Search by student name...";
pub const EMPTY_STATE: &str = "No certificates found matching your search.";
pub const CARD_WIDTH: f32 = 300.0;
