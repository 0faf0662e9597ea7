/// Быстрые вопросы: одна кнопка вместо набора текста
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickQuestion {
    pub key: &'static str,
    pub label: &'static str,
    pub query: &'static str,
}

/// Запрос для неизвестной категории
pub const DEFAULT_QUICK_QUERY: &str = "Tell me more about this topic";

const QUICK_QUESTIONS: &[QuickQuestion] = &[
    QuickQuestion {
        key: "courses",
        label: "📄 Course Details",
        query: "What courses are available at the university?",
    },
    QuickQuestion {
        key: "fees",
        label: "💲 Fee Structure",
        query: "What is the fee structure?",
    },
    QuickQuestion {
        key: "admission",
        label: "🎓 Admission Process",
        query: "What is the admission process?",
    },
    QuickQuestion {
        key: "scholarship",
        label: "🏅 Scholarship",
        query: "What scholarships are available?",
    },
    QuickQuestion {
        key: "facilities",
        label: "📍 Campus Facilities",
        query: "What facilities are available on campus?",
    },
    QuickQuestion {
        key: "calendar",
        label: "📅 Academic Calendar",
        query: "What is the academic calendar?",
    },
    QuickQuestion {
        key: "contact",
        label: "📞 Contact Information",
        query: "How can I contact the university?",
    },
    QuickQuestion {
        key: "hod",
        label: "👤 HOD",
        query: "Akash Sanghi's sir contact?",
    },
    QuickQuestion {
        key: "books",
        label: "📚 Programming Books",
        query: "Can you suggest some books on programming?",
    },
    QuickQuestion {
        key: "bca",
        label: "🎓 BCA",
        query: "Tell me about the BCA program.",
    },
    QuickQuestion {
        key: "about",
        label: "🏢 About Invertis",
        query: "Tell me about Invertis University.",
    },
    QuickQuestion {
        key: "admission_extra",
        label: "🎓 Admission Process",
        query: "Please explain the admission process in invertis.",
    },
];

/// Все быстрые вопросы в порядке отображения
pub fn quick_questions() -> &'static [QuickQuestion] {
    QUICK_QUESTIONS
}

pub fn find(key: &str) -> Option<&'static QuickQuestion> {
    QUICK_QUESTIONS.iter().find(|q| q.key == key)
}

/// Канонический запрос для ключа категории
pub fn query_for(key: &str) -> &'static str {
    find(key).map(|q| q.query).unwrap_or(DEFAULT_QUICK_QUERY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn known_keys_resolve_to_canonical_queries() {
        assert_eq!(query_for("fees"), "What is the fee structure?");
        assert_eq!(query_for("bca"), "Tell me about the BCA program.");
    }

    #[test]
    fn unknown_key_uses_default_query() {
        assert_eq!(query_for("parking"), DEFAULT_QUICK_QUERY);
    }

    #[test]
    fn keys_are_unique() {
        let keys: HashSet<&str> = quick_questions().iter().map(|q| q.key).collect();
        assert_eq!(keys.len(), quick_questions().len());
    }
}
