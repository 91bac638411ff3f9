use crate::core::quick_action::QuickAction;
use crate::core::responses::{support_contact, KeywordRule, RULES};
use crate::utils::text::{filter_items, matches_search};

/// Rules whose topic label or any keyword contains `filter`.
pub fn matching_rules(filter: Option<&str>) -> Vec<&'static KeywordRule> {
    let term = filter.unwrap_or("").trim();
    RULES
        .iter()
        .filter(|rule| {
            matches_search(rule.topic().label(), term)
                || !filter_items(rule.keywords.iter().copied(), term).is_empty()
        })
        .collect()
}

pub fn run_topics(filter: Option<&str>) {
    let rules = matching_rules(filter);
    if rules.is_empty() {
        println!("Nenhum tópico encontrado.");
    } else {
        println!("Tópicos:");
        for rule in rules {
            println!(
                "  {:<20} {}",
                rule.topic().label(),
                rule.keywords.join(", ")
            );
        }
    }

    println!();
    println!("Perguntas rápidas:");
    for action in QuickAction::ALL {
        println!("  {:<10} {}", action.tag(), action.label());
    }
    println!();
    println!("Suporte: {}", support_contact());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::responses::Topic;

    #[test]
    fn no_filter_lists_every_rule() {
        assert_eq!(matching_rules(None).len(), RULES.len());
        assert_eq!(matching_rules(Some("  ")).len(), RULES.len());
    }

    #[test]
    fn filter_matches_keywords_and_labels() {
        let by_keyword: Vec<Topic> = matching_rules(Some("LIXO"))
            .iter()
            .map(|rule| rule.topic())
            .collect();
        assert!(by_keyword.is_empty());

        let by_keyword: Vec<Topic> = matching_rules(Some("deletar"))
            .iter()
            .map(|rule| rule.topic())
            .collect();
        assert_eq!(by_keyword, vec![Topic::DeletePatient]);

        let by_label: Vec<Topic> = matching_rules(Some("agenda de"))
            .iter()
            .map(|rule| rule.topic())
            .collect();
        assert_eq!(by_label, vec![Topic::Scheduling]);
    }
}
