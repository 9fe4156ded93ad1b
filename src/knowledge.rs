//! The admissions knowledge catalog.
//!
//! A [`KnowledgeStore`] is an ordered, read-only list of
//! [`KnowledgeEntry`] values. Order is insertion order and matters: the
//! matcher breaks score ties by catalog position. The store is never
//! mutated after construction, so a single instance can be shared across
//! any number of concurrent queries behind an `Arc`.

use std::{collections::HashSet, fmt, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Topical category of a knowledge entry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Requirements,
    Deadlines,
    Fees,
    Programs,
    Campus,
    Support,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Requirements,
        Category::Deadlines,
        Category::Fees,
        Category::Programs,
        Category::Campus,
        Category::Support,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Requirements => "requirements",
            Category::Deadlines => "deadlines",
            Category::Fees => "fees",
            Category::Programs => "programs",
            Category::Campus => "campus",
            Category::Support => "support",
        }
    }

    /// Human-readable label used by the CLI listing.
    pub fn label(self) -> &'static str {
        match self {
            Category::Requirements => "Admission Requirements",
            Category::Deadlines => "Application Deadlines",
            Category::Fees => "Tuition & Financial Aid",
            Category::Programs => "Academic Programs",
            Category::Campus => "Campus Life",
            Category::Support => "Student Support",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                Error::InvalidCatalog(format!("unknown category '{s}'"))
            })
    }
}

/// One static document in the admissions catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeEntry {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: Category,
    #[serde(default)]
    pub tags: Vec<String>,
    /// ISO date (`YYYY-MM-DD`). Informational only.
    #[serde(default)]
    pub last_updated: String,
}

impl KnowledgeEntry {
    /// Lowercased `title content tags...` text the matcher searches.
    pub fn searchable_text(&self) -> String {
        format!("{} {} {}", self.title, self.content, self.tags.join(" "))
            .to_lowercase()
    }
}

/// Immutable, ordered catalog of knowledge entries.
#[derive(Debug, Clone)]
pub struct KnowledgeStore {
    entries: Vec<KnowledgeEntry>,
}

impl Default for KnowledgeStore {
    fn default() -> Self {
        Self::builtin()
    }
}

impl KnowledgeStore {
    /// The built-in admissions catalog.
    pub fn builtin() -> Self {
        Self {
            entries: seed_entries(),
        }
    }

    /// Build a store from caller-supplied entries.
    ///
    /// The store must be non-empty, ids must be unique, and every entry
    /// needs a non-empty id, title and content.
    pub fn from_entries(entries: Vec<KnowledgeEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::InvalidCatalog(
                "catalog contains no entries".into(),
            ));
        }

        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if entry.id.trim().is_empty() {
                return Err(Error::InvalidCatalog(
                    "entry with empty id".into(),
                ));
            }
            if entry.title.trim().is_empty() {
                return Err(Error::InvalidCatalog(format!(
                    "entry '{}' has an empty title",
                    entry.id
                )));
            }
            if entry.content.trim().is_empty() {
                return Err(Error::InvalidCatalog(format!(
                    "entry '{}' has empty content",
                    entry.id
                )));
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(Error::InvalidCatalog(format!(
                    "duplicate entry id '{}'",
                    entry.id
                )));
            }
        }

        Ok(Self { entries })
    }

    /// Load a catalog from a JSON array of entries.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let entries: Vec<KnowledgeEntry> = serde_json::from_str(&contents)?;
        let store = Self::from_entries(entries)?;
        tracing::info!(
            path = %path.display(),
            entries = store.len(),
            "loaded knowledge catalog"
        );
        Ok(store)
    }

    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&KnowledgeEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn entry(
    id: &str,
    title: &str,
    content: &str,
    category: Category,
    tags: &[&str],
    last_updated: &str,
) -> KnowledgeEntry {
    KnowledgeEntry {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        category,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        last_updated: last_updated.to_string(),
    }
}

fn seed_entries() -> Vec<KnowledgeEntry> {
    vec![
        entry(
            "1",
            "Undergraduate Admission Requirements",
            UNDERGRADUATE_REQUIREMENTS,
            Category::Requirements,
            &["undergraduate", "admission", "GPA", "SAT", "ACT", "requirements"],
            "2024-01-15",
        ),
        entry(
            "2",
            "Graduate Admission Requirements",
            GRADUATE_REQUIREMENTS,
            Category::Requirements,
            &["graduate", "admission", "GRE", "GMAT", "international"],
            "2024-01-15",
        ),
        entry(
            "3",
            "Application Deadlines 2024-2025",
            DEADLINES,
            Category::Deadlines,
            &["deadlines", "application", "FAFSA", "international", "transfer"],
            "2024-01-10",
        ),
        entry(
            "4",
            "Tuition and Fees Structure",
            TUITION_AND_FEES,
            Category::Fees,
            &["tuition", "fees", "costs", "scholarships", "financial aid"],
            "2024-01-12",
        ),
        entry(
            "5",
            "Academic Programs and Schools",
            PROGRAMS,
            Category::Programs,
            &[
                "programs",
                "majors",
                "degrees",
                "schools",
                "undergraduate",
                "graduate",
            ],
            "2024-01-08",
        ),
        entry(
            "6",
            "Campus Life and Support Services",
            CAMPUS_LIFE,
            Category::Campus,
            &[
                "campus life",
                "support services",
                "facilities",
                "organizations",
            ],
            "2024-01-05",
        ),
    ]
}

const UNDERGRADUATE_REQUIREMENTS: &str = "Complete admission requirements for undergraduate programs:\n\
    \n\
    **Academic Requirements:**\n\
    - High school diploma or equivalent\n\
    - Minimum cumulative GPA of 3.0 (4.0 scale)\n\
    - Core curriculum completion (4 years English, 3 years Math, 3 years Science, 2 years Social Studies)\n\
    \n\
    **Standardized Tests:**\n\
    - SAT: Minimum 1200 (recommended 1350+)\n\
    - ACT: Minimum 26 (recommended 30+)\n\
    - International students: TOEFL 80+ or IELTS 6.5+\n\
    \n\
    **Application Materials:**\n\
    - Completed application form\n\
    - Official transcripts\n\
    - Two letters of recommendation (one academic, one personal)\n\
    - Personal statement (500-750 words)\n\
    - Resume/Activity list\n\
    - Application fee: $75\n\
    \n\
    **Additional Requirements (Program-Specific):**\n\
    - Engineering: Advanced Math and Science courses\n\
    - Business: Economics or Statistics preferred\n\
    - Arts: Portfolio submission required\n\
    - Pre-Med: Biology, Chemistry, Physics, and Math courses";

const GRADUATE_REQUIREMENTS: &str = "Graduate program admission requirements:\n\
    \n\
    **General Requirements:**\n\
    - Bachelor's degree from accredited institution\n\
    - Minimum undergraduate GPA of 3.2\n\
    - GRE/GMAT scores (varies by program)\n\
    - Statement of Purpose\n\
    - Three academic/professional references\n\
    - Resume/CV\n\
    \n\
    **Program-Specific Requirements:**\n\
    - MBA: 2+ years work experience, GMAT 550+\n\
    - Engineering: Relevant undergraduate degree, GRE required\n\
    - Computer Science: Programming background, technical portfolio\n\
    - Education: Teaching license (for some programs)\n\
    - Law: LSAT required, bachelor's degree in any field\n\
    - Medicine: MCAT, prerequisite courses, clinical experience\n\
    \n\
    **International Students:**\n\
    - TOEFL 100+ or IELTS 7.0+\n\
    - Credential evaluation required\n\
    - Financial documentation\n\
    - Visa support provided upon admission";

const DEADLINES: &str = "Important dates for the 2024-2025 academic year:\n\
    \n\
    **Undergraduate Deadlines:**\n\
    - Early Decision I: November 15, 2024\n\
    - Early Decision II: January 15, 2025\n\
    - Regular Decision: February 1, 2025\n\
    - Transfer Applications: March 15, 2025\n\
    - Late Applications: May 1, 2025 (space permitting)\n\
    \n\
    **Graduate Deadlines:**\n\
    - Fall Semester: February 1, 2025\n\
    - Spring Semester: October 15, 2024\n\
    - Summer Semester: March 1, 2025\n\
    \n\
    **International Student Deadlines:**\n\
    - Fall Semester: January 15, 2025\n\
    - Spring Semester: September 15, 2024\n\
    \n\
    **Financial Aid Deadlines:**\n\
    - FAFSA: March 1, 2025\n\
    - CSS Profile: February 15, 2025\n\
    - Scholarship Applications: January 31, 2025\n\
    \n\
    **Important Reminders:**\n\
    - Submit all materials by 11:59 PM EST on deadline date\n\
    - Late applications accepted based on space availability\n\
    - Priority given to complete applications submitted by deadline";

const TUITION_AND_FEES: &str = "Comprehensive cost breakdown for 2024-2025:\n\
    \n\
    **Undergraduate Costs (per year):**\n\
    - Tuition: $45,000\n\
    - Technology Fee: $500\n\
    - Student Activity Fee: $300\n\
    - Health Services Fee: $400\n\
    - Total Academic Costs: $46,200\n\
    \n\
    **Room and Board:**\n\
    - Standard Double Room: $8,500\n\
    - Premium Single Room: $12,000\n\
    - Meal Plan (19 meals/week): $4,500\n\
    - Meal Plan (14 meals/week): $3,800\n\
    \n\
    **Graduate Costs (per year):**\n\
    - Master's Programs: $52,000\n\
    - Doctoral Programs: $55,000\n\
    - MBA Program: $65,000\n\
    - Law School: $58,000\n\
    - Medical School: $62,000\n\
    \n\
    **Additional Expenses:**\n\
    - Books and Supplies: $1,200\n\
    - Personal Expenses: $2,000\n\
    - Transportation: $1,500\n\
    - Total Estimated Cost: $55,000-60,000\n\
    \n\
    **Payment Options:**\n\
    - Full payment discount: 2%\n\
    - Monthly payment plan available\n\
    - Merit scholarships: $5,000-$25,000\n\
    - Need-based aid: Up to full tuition";

const PROGRAMS: &str = "Comprehensive list of academic offerings:\n\
    \n\
    **School of Engineering:**\n\
    - Computer Science (BS, MS, PhD)\n\
    - Electrical Engineering (BS, MS, PhD)\n\
    - Mechanical Engineering (BS, MS, PhD)\n\
    - Civil Engineering (BS, MS, PhD)\n\
    - Biomedical Engineering (BS, MS, PhD)\n\
    - Environmental Engineering (BS, MS)\n\
    - Data Science (BS, MS)\n\
    \n\
    **School of Business:**\n\
    - Business Administration (BBA, MBA, Executive MBA)\n\
    - Accounting (BS, MS)\n\
    - Finance (BS, MS)\n\
    - Marketing (BS, MS)\n\
    - International Business (BS, MS)\n\
    - Entrepreneurship (BS, Certificate)\n\
    \n\
    **School of Liberal Arts:**\n\
    - English Literature (BA, MA, PhD)\n\
    - History (BA, MA, PhD)\n\
    - Psychology (BA, MA, PhD)\n\
    - Sociology (BA, MA)\n\
    - Philosophy (BA, MA)\n\
    - Foreign Languages (BA, MA)\n\
    \n\
    **School of Sciences:**\n\
    - Biology (BS, MS, PhD)\n\
    - Chemistry (BS, MS, PhD)\n\
    - Physics (BS, MS, PhD)\n\
    - Mathematics (BS, MS, PhD)\n\
    - Environmental Science (BS, MS)\n\
    \n\
    **Professional Schools:**\n\
    - School of Medicine (MD, PhD)\n\
    - School of Law (JD, LLM)\n\
    - School of Education (MEd, EdD)\n\
    - School of Nursing (BSN, MSN, DNP)";

const CAMPUS_LIFE: &str = "Comprehensive support and campus life information:\n\
    \n\
    **Student Support Services:**\n\
    - Academic Advising Center\n\
    - Career Services and Job Placement\n\
    - Counseling and Psychological Services\n\
    - Disability Support Services\n\
    - International Student Services\n\
    - Financial Aid Office\n\
    - Student Health Center\n\
    - Tutoring and Learning Center\n\
    \n\
    **Campus Facilities:**\n\
    - 15 Residence Halls (4,500 bed capacity)\n\
    - 3 Dining Centers + 12 Cafés\n\
    - State-of-the-art Library System\n\
    - Recreation and Fitness Centers\n\
    - Student Union Building\n\
    - Performing Arts Center\n\
    - Research Laboratories\n\
    - Innovation and Entrepreneurship Hub\n\
    \n\
    **Student Organizations:**\n\
    - 200+ Student Clubs and Organizations\n\
    - 25 Greek Life Organizations\n\
    - Student Government Association\n\
    - Honor Societies and Academic Clubs\n\
    - Cultural and International Organizations\n\
    - Sports and Recreation Clubs\n\
    - Volunteer and Service Organizations\n\
    \n\
    **Campus Safety:**\n\
    - 24/7 Campus Security\n\
    - Emergency Alert System\n\
    - Safe Walk Program\n\
    - Well-lit Campus Pathways\n\
    - Security Cameras Throughout Campus\n\
    \n\
    **Technology Resources:**\n\
    - Campus-wide WiFi\n\
    - Computer Labs and Study Spaces\n\
    - Online Learning Management System\n\
    - Digital Library Resources\n\
    - Tech Support Services";
