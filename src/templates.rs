//! Canned answer text, kept as data.
//!
//! Every answer the assistant can give is a fixed string selected by a
//! key. The three answer paths have their own key enums and their own
//! wording: the knowledge-store path ([`RagTemplate`]), the FAQ keyword
//! path ([`FaqTemplate`]) and the simulated generation service
//! ([`GenerationTemplate`]). Similar topics deliberately read
//! differently across paths, so keys are never shared between them.

/// Appended to the summary built from the best entry's content.
pub const SUMMARY_PROMPT: &str =
    "\n\nWould you like more specific information about any aspect?";

/// Prefix of the attribution trailer, followed by comma-joined titles.
pub const SOURCES_PREFIX: &str = "Sources: ";

/// Appended to answers whose confidence is below the disclaimer bar.
pub const LOW_CONFIDENCE_NOTICE: &str = "For more detailed information, please contact our admissions office directly.";

/// Substituted for any answer whose producing strategy failed.
pub const APOLOGY: &str = "I apologize, but I'm experiencing technical difficulties. Please try again or contact our admissions office for immediate assistance.";

/// Message of the error raised when the generation service fails.
pub const GENERATION_FAILED: &str =
    "Failed to generate response from the generation service";

/// First bot message of a chat session.
pub const GREETING: &str = "Hello! I'm your College Admission Assistant powered by IBM Granite AI. I'm here to help you with admission requirements, application guidance, course selection, fees, and deadlines. How can I assist you today?";

/// Follow-up appended to a matched FAQ answer.
pub fn faq_follow_up(answer: &str, category: &str) -> String {
    format!(
        "{answer}\n\nIs there anything specific about {} you'd like to know more about?",
        category.to_lowercase()
    )
}

/// Knowledge-store answer templates, keyed by category branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RagTemplate {
    UndergraduateRequirements,
    GraduateRequirements,
    UndergraduateDeadlines,
    GraduateDeadlines,
    UndergraduateFees,
    GraduateFees,
    EngineeringPrograms,
    BusinessPrograms,
    ProgramsOverview,
    CampusLife,
    /// Topic menu used when nothing in the catalog matched.
    Default,
}

impl RagTemplate {
    pub fn text(self) -> &'static str {
        match self {
            RagTemplate::UndergraduateRequirements => {
                RAG_UNDERGRADUATE_REQUIREMENTS
            }
            RagTemplate::GraduateRequirements => RAG_GRADUATE_REQUIREMENTS,
            RagTemplate::UndergraduateDeadlines => RAG_UNDERGRADUATE_DEADLINES,
            RagTemplate::GraduateDeadlines => RAG_GRADUATE_DEADLINES,
            RagTemplate::UndergraduateFees => RAG_UNDERGRADUATE_FEES,
            RagTemplate::GraduateFees => RAG_GRADUATE_FEES,
            RagTemplate::EngineeringPrograms => RAG_ENGINEERING_PROGRAMS,
            RagTemplate::BusinessPrograms => RAG_BUSINESS_PROGRAMS,
            RagTemplate::ProgramsOverview => RAG_PROGRAMS_OVERVIEW,
            RagTemplate::CampusLife => RAG_CAMPUS_LIFE,
            RagTemplate::Default => RAG_DEFAULT,
        }
    }
}

/// Keyword-triggered answers of the FAQ path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaqTemplate {
    Deadlines,
    Fees,
    Programs,
    Requirements,
    Help,
}

impl FaqTemplate {
    pub fn text(self) -> &'static str {
        match self {
            FaqTemplate::Deadlines => FAQ_DEADLINES,
            FaqTemplate::Fees => FAQ_FEES,
            FaqTemplate::Programs => FAQ_PROGRAMS,
            FaqTemplate::Requirements => FAQ_REQUIREMENTS,
            FaqTemplate::Help => FAQ_HELP,
        }
    }
}

/// Output bodies of the simulated generation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerationTemplate {
    GraduateRequirements,
    UndergraduateRequirements,
    Deadlines,
    Fees,
    Programs,
    General,
}

impl GenerationTemplate {
    pub fn text(self) -> &'static str {
        match self {
            GenerationTemplate::GraduateRequirements => {
                GEN_GRADUATE_REQUIREMENTS
            }
            GenerationTemplate::UndergraduateRequirements => {
                GEN_UNDERGRADUATE_REQUIREMENTS
            }
            GenerationTemplate::Deadlines => GEN_DEADLINES,
            GenerationTemplate::Fees => GEN_FEES,
            GenerationTemplate::Programs => GEN_PROGRAMS,
            GenerationTemplate::General => GEN_GENERAL,
        }
    }
}

// -- Knowledge-store path --

const RAG_UNDERGRADUATE_REQUIREMENTS: &str = "For undergraduate admission, you'll need:\n\
    \n\
    **Academic Requirements:**\n\
    • High school diploma with minimum 3.0 GPA\n\
    • Core curriculum completion (4 years English, 3 years Math, 3 years Science, 2 years Social Studies)\n\
    \n\
    **Test Scores:**\n\
    • SAT: Minimum 1200 (recommended 1350+)\n\
    • ACT: Minimum 26 (recommended 30+)\n\
    • International students: TOEFL 80+ or IELTS 6.5+\n\
    \n\
    **Application Materials:**\n\
    • Completed application form\n\
    • Official transcripts\n\
    • Two letters of recommendation\n\
    • Personal statement (500-750 words)\n\
    • Resume/Activity list\n\
    • $75 application fee\n\
    \n\
    Some programs have additional requirements. Would you like details about a specific program?";

const RAG_GRADUATE_REQUIREMENTS: &str = "For graduate admission, you'll need:\n\
    \n\
    **General Requirements:**\n\
    • Bachelor's degree from accredited institution\n\
    • Minimum undergraduate GPA of 3.2\n\
    • GRE/GMAT scores (varies by program)\n\
    • Statement of Purpose\n\
    • Three academic/professional references\n\
    • Resume/CV\n\
    \n\
    **Program-Specific Highlights:**\n\
    • MBA: 2+ years work experience, GMAT 550+\n\
    • Engineering: Relevant undergraduate degree, GRE required\n\
    • Computer Science: Programming background preferred\n\
    • International students need TOEFL 100+ or IELTS 7.0+\n\
    \n\
    Which graduate program interests you most?";

const RAG_GRADUATE_DEADLINES: &str = "**Graduate Application Deadlines:**\n\
    • Fall Semester: February 1, 2025\n\
    • Spring Semester: October 15, 2024\n\
    • Summer Semester: March 1, 2025\n\
    • International Students (Fall): January 15, 2025\n\
    \n\
    **Financial Aid Deadlines:**\n\
    • FAFSA: March 1, 2025\n\
    • Scholarship Applications: January 31, 2025\n\
    \n\
    Submit all materials by 11:59 PM EST on the deadline date.";

const RAG_UNDERGRADUATE_DEADLINES: &str = "**Undergraduate Application Deadlines:**\n\
    • Early Decision I: November 15, 2024\n\
    • Early Decision II: January 15, 2025\n\
    • Regular Decision: February 1, 2025\n\
    • Transfer Applications: March 15, 2025\n\
    \n\
    **Financial Aid Deadlines:**\n\
    • FAFSA: March 1, 2025\n\
    • CSS Profile: February 15, 2025\n\
    \n\
    International students should apply by January 15, 2025 for best consideration.";

const RAG_GRADUATE_FEES: &str = "**Graduate Program Costs (per year):**\n\
    • Master's Programs: $52,000\n\
    • Doctoral Programs: $55,000\n\
    • MBA Program: $65,000\n\
    • Law School: $58,000\n\
    • Medical School: $62,000\n\
    \n\
    **Financial Aid Available:**\n\
    • Merit scholarships: $5,000-$25,000\n\
    • Need-based aid: Up to full tuition\n\
    • Graduate assistantships available\n\
    • Monthly payment plans offered\n\
    \n\
    Would you like information about specific scholarship opportunities?";

const RAG_UNDERGRADUATE_FEES: &str = "**Undergraduate Costs (2024-2025):**\n\
    • Tuition: $45,000\n\
    • Room & Board: $12,000-$13,000\n\
    • Books & Supplies: $1,200\n\
    • Total Estimated Cost: $58,000-$60,000\n\
    \n\
    **Financial Aid:**\n\
    • Merit scholarships: $5,000-$25,000\n\
    • Need-based aid available\n\
    • 94% of students receive some form of aid\n\
    • Full payment discount: 2%\n\
    \n\
    The average financial aid package covers 65% of total costs.";

const RAG_ENGINEERING_PROGRAMS: &str = "**School of Engineering Programs:**\n\
    • Computer Science (BS, MS, PhD)\n\
    • Electrical Engineering (BS, MS, PhD)\n\
    • Mechanical Engineering (BS, MS, PhD)\n\
    • Civil Engineering (BS, MS, PhD)\n\
    • Biomedical Engineering (BS, MS, PhD)\n\
    • Data Science (BS, MS)\n\
    \n\
    All engineering programs feature hands-on learning, industry partnerships, and excellent job placement rates (95%+).";

const RAG_BUSINESS_PROGRAMS: &str = "**School of Business Programs:**\n\
    • Business Administration (BBA, MBA, Executive MBA)\n\
    • Accounting (BS, MS)\n\
    • Finance (BS, MS)\n\
    • Marketing (BS, MS)\n\
    • International Business (BS, MS)\n\
    • Entrepreneurship (BS, Certificate)\n\
    \n\
    Our business school is AACSB accredited with strong industry connections and internship opportunities.";

const RAG_PROGRAMS_OVERVIEW: &str = "We offer 230+ academic programs across multiple schools:\n\
    • Engineering & Technology\n\
    • Business & Management\n\
    • Liberal Arts & Sciences\n\
    • Medicine & Health Sciences\n\
    • Law and Legal Studies\n\
    • Education\n\
    • Natural Sciences\n\
    \n\
    Which field interests you most? I can provide detailed information about specific programs.";

const RAG_CAMPUS_LIFE: &str = "**Campus Life Highlights:**\n\
    • 15 Residence Halls (4,500 bed capacity)\n\
    • 3 Dining Centers + 12 Cafés\n\
    • 200+ Student Organizations\n\
    • State-of-the-art Recreation Centers\n\
    • Comprehensive Support Services\n\
    \n\
    **Student Support:**\n\
    • Academic Advising & Career Services\n\
    • Counseling & Health Services\n\
    • International Student Support\n\
    • Disability Services\n\
    • 24/7 Campus Security\n\
    \n\
    95% of freshmen live on campus, creating a vibrant community experience. What aspect of campus life interests you most?";

const RAG_DEFAULT: &str = "I'd be happy to help you with information about college admissions! I can assist with:\n\
    \n\
    • **Admission Requirements** - GPA, test scores, application materials\n\
    • **Application Deadlines** - Important dates and timelines\n\
    • **Tuition & Financial Aid** - Costs, scholarships, and payment options\n\
    • **Academic Programs** - Available majors and degree options\n\
    • **Campus Life** - Housing, activities, and support services\n\
    \n\
    What specific aspect would you like to know more about?\n\
    \n\
    *This response is powered by IBM Granite AI with Retrieval-Augmented Generation (RAG) technology.*";

// -- FAQ path --

const FAQ_DEADLINES: &str = "Here are our key application deadlines:\n\
    • Early Decision: November 15th\n\
    • Regular Decision: February 1st\n\
    • Late Applications: March 15th\n\
    • International Students: January 15th\n\
    \n\
    Would you like more details about any specific deadline?";

const FAQ_FEES: &str = "Our tuition structure is:\n\
    • Undergraduate: $45,000/year\n\
    • Graduate: $52,000/year\n\
    • Housing: $12,000/year\n\
    • Meal Plan: $4,500/year\n\
    \n\
    Financial aid and scholarships are available. Would you like information about financial assistance options?";

const FAQ_PROGRAMS: &str = "We offer 150+ undergraduate and 80+ graduate programs across:\n\
    • Engineering & Technology\n\
    • Business & Management\n\
    • Liberal Arts & Sciences\n\
    • Computer Science\n\
    • Medicine & Health Sciences\n\
    • Law\n\
    \n\
    Which field interests you most?";

const FAQ_REQUIREMENTS: &str = "General admission requirements include:\n\
    • High school diploma (3.0+ GPA)\n\
    • Standardized test scores (SAT/ACT)\n\
    • Letters of recommendation\n\
    • Personal statement\n\
    • Application form\n\
    \n\
    Specific programs may have additional requirements. Which program are you interested in?";

const FAQ_HELP: &str = "I'd be happy to help you with information about:\n\
    • Admission requirements and eligibility\n\
    • Application deadlines and process\n\
    • Tuition fees and financial aid\n\
    • Available programs and courses\n\
    • Campus life and facilities\n\
    \n\
    What specific aspect would you like to know about?";

// -- Generation service --

const GEN_GRADUATE_REQUIREMENTS: &str = "Based on our admission data, graduate programs require a bachelor's degree with a minimum 3.2 GPA. Most programs require GRE scores, with competitive applicants scoring in the 80th percentile or higher. Professional programs like MBA require work experience, typically 2-5 years. International students need TOEFL 100+ or IELTS 7.0+. Strong letters of recommendation and a compelling statement of purpose significantly improve admission chances.";

const GEN_UNDERGRADUATE_REQUIREMENTS: &str = "For undergraduate admission, successful applicants typically have a 3.5+ GPA and SAT scores above 1300. We require completion of core high school courses including 4 years of English, 3 years each of math and science, and 2 years of social studies. Strong extracurricular involvement and leadership experience enhance applications. International students need TOEFL 80+ or IELTS 6.5+. Early application is recommended for better scholarship consideration.";

const GEN_DEADLINES: &str = "Application deadlines are strategically set to allow comprehensive review. Early Decision (November 15) offers the best admission chances and merit scholarship consideration. Regular Decision (February 1) provides more time for application preparation. International students should apply by January 15 to ensure visa processing time. Financial aid applications (FAFSA) should be completed by March 1 for optimal aid consideration. Late applications are reviewed space-permitting after May 1.";

const GEN_FEES: &str = "Our tuition structure reflects our commitment to educational excellence. Undergraduate tuition of $45,000 includes access to world-class faculty, research opportunities, and career services. Graduate programs range from $52,000-$65,000 depending on specialization. We offer substantial financial aid - 94% of students receive assistance averaging $28,000. Merit scholarships range from $5,000-$25,000 annually. Payment plans and work-study options help manage costs.";

const GEN_PROGRAMS: &str = "Our 230+ academic programs are designed for career success. Engineering programs feature 95%+ job placement rates with industry partnerships at companies like Google, Microsoft, and Tesla. Business programs are AACSB accredited with strong alumni networks in Fortune 500 companies. Liberal arts programs emphasize critical thinking and communication skills valued by employers. Professional programs in medicine, law, and education maintain excellent board pass rates and career outcomes.";

const GEN_GENERAL: &str = "I'm here to provide comprehensive admission guidance using advanced AI capabilities. I can help with detailed information about requirements, deadlines, costs, programs, and campus life. My knowledge base is continuously updated with the latest admission policies and procedures. For complex situations or specific concerns, I can connect you with human admission counselors who specialize in your area of interest.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faq_follow_up_lowercases_category() {
        assert_eq!(
            faq_follow_up("Apply by March.", "Financial Aid"),
            "Apply by March.\n\nIs there anything specific about financial aid you'd like to know more about?"
        );
    }

    #[test]
    fn templates_are_multi_line_where_formatted() {
        let text = RagTemplate::UndergraduateRequirements.text();
        assert!(text.starts_with("For undergraduate admission, you'll need:\n\n"));
        assert!(text.contains("\n• SAT: Minimum 1200 (recommended 1350+)\n"));
        assert!(!text.contains("\\n"));
        assert!(FaqTemplate::Help.text().contains("\n• Campus life and facilities\n"));
    }

    #[test]
    fn generation_bodies_are_single_paragraphs() {
        for key in [
            GenerationTemplate::GraduateRequirements,
            GenerationTemplate::UndergraduateRequirements,
            GenerationTemplate::Deadlines,
            GenerationTemplate::Fees,
            GenerationTemplate::Programs,
            GenerationTemplate::General,
        ] {
            assert!(!key.text().contains('\n'));
        }
    }

    #[test]
    fn paths_do_not_share_wording() {
        assert_ne!(RagTemplate::Default.text(), FaqTemplate::Help.text());
        assert_ne!(
            RagTemplate::GraduateRequirements.text(),
            GenerationTemplate::GraduateRequirements.text()
        );
    }
}
