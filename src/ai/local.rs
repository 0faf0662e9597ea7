/// Локальные ответы по правилам, когда сервер недоступен.
/// Правила проверяются строго по порядку: побеждает первое совпадение.

pub const FEES_RESPONSE: &str = "The fee structure for different courses varies...";

pub const SCHOLARSHIP_RESPONSE: &str = "We offer various scholarship programs...";

pub const ADMISSION_RESPONSE: &str = "Admission process:\n1. Online application...";

pub const FACILITIES_RESPONSE: &str = "Our campus offers labs, hostels, sports, Wi-Fi...";

pub const GENERIC_RESPONSE: &str = "I can help with courses, fees, admissions, scholarships, \
facilities, and more. Please ask a specific question.";

/// Одно правило: если во входе есть любое из ключевых слов, возвращаем ответ
#[derive(Debug, Clone, Copy)]
pub struct FallbackRule {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub response: &'static str,
}

impl FallbackRule {
    fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|&word| normalized.contains(word))
    }
}

const RULES: &[FallbackRule] = &[
    FallbackRule {
        name: "fees",
        keywords: &["fee", "cost"],
        response: FEES_RESPONSE,
    },
    FallbackRule {
        name: "scholarship",
        keywords: &["scholarship"],
        response: SCHOLARSHIP_RESPONSE,
    },
    FallbackRule {
        name: "admission",
        keywords: &["admission", "apply"],
        response: ADMISSION_RESPONSE,
    },
    FallbackRule {
        name: "facilities",
        keywords: &["facility", "campus"],
        response: FACILITIES_RESPONSE,
    },
];

pub struct FallbackResponder;

impl FallbackResponder {
    /// Упорядоченная таблица правил
    pub fn rules() -> &'static [FallbackRule] {
        RULES
    }

    /// Чистая и тотальная функция: всегда возвращает текст
    pub fn respond(user_input: &str) -> String {
        let input_lower = user_input.to_lowercase();

        match RULES.iter().find(|rule| rule.matches(&input_lower)) {
            Some(rule) => {
                log::debug!("📴 Локальное правило '{}'", rule.name);
                rule.response.to_string()
            }
            None => GENERIC_RESPONSE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_rule_answers_its_topic() {
        assert_eq!(FallbackResponder::respond("What is the fee structure?"), FEES_RESPONSE);
        assert_eq!(FallbackResponder::respond("total cost per year"), FEES_RESPONSE);
        assert_eq!(FallbackResponder::respond("Any scholarship?"), SCHOLARSHIP_RESPONSE);
        assert_eq!(FallbackResponder::respond("How do I apply"), ADMISSION_RESPONSE);
        assert_eq!(FallbackResponder::respond("campus life"), FACILITIES_RESPONSE);
        assert_eq!(FallbackResponder::respond("Hostel facility"), FACILITIES_RESPONSE);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(FallbackResponder::respond("FEES PLEASE"), FEES_RESPONSE);
        assert_eq!(FallbackResponder::respond("ScHoLaRsHiP"), SCHOLARSHIP_RESPONSE);
    }

    #[test]
    fn earlier_rule_wins_when_several_match() {
        assert_eq!(
            FallbackResponder::respond("Is there a scholarship that covers the fee?"),
            FEES_RESPONSE
        );
        assert_eq!(
            FallbackResponder::respond("apply for a scholarship"),
            SCHOLARSHIP_RESPONSE
        );
        assert_eq!(
            FallbackResponder::respond("campus admission office"),
            ADMISSION_RESPONSE
        );
    }

    #[test]
    fn unmatched_input_gets_guidance() {
        assert_eq!(FallbackResponder::respond("hello there"), GENERIC_RESPONSE);
        assert_eq!(FallbackResponder::respond(""), GENERIC_RESPONSE);
    }

    #[test]
    fn respond_is_deterministic() {
        let input = "Tell me about campus fees";
        assert_eq!(FallbackResponder::respond(input), FallbackResponder::respond(input));
    }

    #[test]
    fn canned_texts_are_exact() {
        assert_eq!(FEES_RESPONSE, "The fee structure for different courses varies...");
        assert_eq!(SCHOLARSHIP_RESPONSE, "We offer various scholarship programs...");
        assert_eq!(ADMISSION_RESPONSE, "Admission process:\n1. Online application...");
        assert_eq!(FACILITIES_RESPONSE, "Our campus offers labs, hostels, sports, Wi-Fi...");
        assert_eq!(
            GENERIC_RESPONSE,
            "I can help with courses, fees, admissions, scholarships, facilities, and more. Please ask a specific question."
        );
    }

    #[test]
    fn rule_order_is_fixed() {
        let names: Vec<&str> = FallbackResponder::rules().iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["fees", "scholarship", "admission", "facilities"]);
    }
}
