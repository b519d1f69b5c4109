//! Built-in rule table for the property-leasing assistant.
//!
//! Eleven rules covering the recurring tenant questions for Clear Water
//! Apartments. The declaration order below is the precedence order and is
//! load-bearing: several triggers overlap (e.g. "late fee" questions also
//! mention rent) and the earlier rule must answer.

use crate::rule::{Rule, RuleTable, Trigger};

/// Canned line for the late-fee / rent-due questions (shared by two rules).
const RENT_DUE_RESPONSE: &str = "Rent is due on the 1st of each month. A late fee of $50 will be applied if payment is received after the 5th. Please check your lease for specific details.";

/// Fixed apology returned when the model fallback fails for any reason.
pub const APOLOGY: &str = "I'm not sure I understand your inquiry. Could you please rephrase that, or contact our leasing office at (555) 123-4567?";

/// Build the property assistant's rule table.
pub fn rules() -> RuleTable {
    RuleTable::new(vec![
        // Late payment: ("late" AND "payment") OR "late fee"
        Rule::new(
            "late_payment",
            Trigger::any_of([
                Trigger::all(["late", "payment"]),
                Trigger::any(["late fee"]),
            ]),
            RENT_DUE_RESPONSE,
        ),
        // Portal access: ("access" AND "portal") OR ("how" AND "portal")
        Rule::new(
            "portal_access",
            Trigger::any_of([
                Trigger::all(["access", "portal"]),
                Trigger::all(["how", "portal"]),
            ]),
            "The payment portal can be accessed through our website or the resident app. Use your email and password to log in. If you have trouble, contact the office for assistance.",
        ),
        // Rent due date: ("when" AND "rent" AND "due") OR "rent due"
        Rule::new(
            "rent_due",
            Trigger::any_of([
                Trigger::all(["when", "rent", "due"]),
                Trigger::any(["rent due"]),
            ]),
            RENT_DUE_RESPONSE,
        ),
        // Package delivery: ("package" OR "packages") AND ("deliver" OR "delivery" OR "delivered")
        Rule::new(
            "package_delivery",
            Trigger::all_of([
                Trigger::any(["package", "packages"]),
                Trigger::any(["deliver", "delivery", "delivered"]),
            ]),
            "Packages are generally delivered to your front door, placed inside of your mailbox, or delivered to the package room. You'll receive a notification via the resident mobile app when your package is ready for pickup.",
        ),
        // Office hours: "office hours" OR ("when" AND "office") OR ("hours" AND "open")
        Rule::new(
            "office_hours",
            Trigger::any_of([
                Trigger::any(["office hours"]),
                Trigger::all(["when", "office"]),
                Trigger::all(["hours", "open"]),
            ]),
            "Our leasing office is open Monday\u{2013}Friday from 9am\u{2013}5pm and Saturday 10am\u{2013}4pm. We are closed on Sundays and major holidays.",
        ),
        // Maintenance: ("maintenance" OR "repair" OR "broken") AND ("submit" OR "request" OR "how")
        Rule::new(
            "maintenance",
            Trigger::all_of([
                Trigger::any(["maintenance", "repair", "broken"]),
                Trigger::any(["submit", "request", "how"]),
            ]),
            "To submit a maintenance request, log into the resident portal and select 'Maintenance'. For emergencies like leaks or no heat, call our 24/7 line immediately.",
        ),
        // Parking: ("parking" OR "garage" OR "spot") OR ("permit" AND "parking")
        Rule::new(
            "parking",
            Trigger::any_of([
                Trigger::any(["parking", "garage", "spot"]),
                Trigger::all(["permit", "parking"]),
            ]),
            "Parking permits are issued through the leasing office. Each resident will be given an assigned parking spot. Guest parking is limited.",
        ),
        // Move-out: ("move" AND "out") OR "move-out" OR ("notice" AND "move")
        Rule::new(
            "move_out",
            Trigger::any_of([
                Trigger::all(["move", "out"]),
                Trigger::any(["move-out"]),
                Trigger::all(["notice", "move"]),
            ]),
            "Our move-out policy requires a 30-day written notice. Please refer to your lease agreement for specific details and any associated fees.",
        ),
        // Contact: ("contact" AND ("office" OR "leasing")) OR ("how" AND "reach") OR ("email" AND "phone")
        Rule::new(
            "contact",
            Trigger::any_of([
                Trigger::all_of([
                    Trigger::any(["contact"]),
                    Trigger::any(["office", "leasing"]),
                ]),
                Trigger::all(["how", "reach"]),
                Trigger::all(["email", "phone"]),
            ]),
            "You can contact the leasing office by calling (555) 123-4567 or emailing leasing@ourproperty.com. We're here to help with any questions or concerns you may have.",
        ),
        // Utilities: "utilities" OR (utility term AND billing term). The
        // AND binds tighter than the OR.
        Rule::new(
            "utilities",
            Trigger::any_of([
                Trigger::any(["utilities"]),
                Trigger::all_of([
                    Trigger::any(["water", "electric", "gas", "wifi", "internet"]),
                    Trigger::any(["included", "bill", "pay"]),
                ]),
            ]),
            "Utilities are set up directly with providers. Water and trash are billed independently through the property. Check your lease for additional details.",
        ),
        // Gratitude
        Rule::new(
            "thanks",
            Trigger::any(["thank", "thanks", "thx"]),
            "You're welcome! Is there anything else that I can assist you with today?",
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_order() {
        let table = rules();
        let names: Vec<&str> = table.rules().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "late_payment",
                "portal_access",
                "rent_due",
                "package_delivery",
                "office_hours",
                "maintenance",
                "parking",
                "move_out",
                "contact",
                "utilities",
                "thanks",
            ]
        );
    }

    // ---- Late payment ----

    #[test]
    fn test_late_and_payment_any_case() {
        let table = rules();
        for input in [
            "my payment will be late",
            "LATE PAYMENT question",
            "what if I am Late with my Payment this month",
        ] {
            let rule = table.first_match(input).unwrap();
            assert_eq!(rule.name, "late_payment");
            assert_eq!(rule.response, RENT_DUE_RESPONSE);
        }
    }

    #[test]
    fn test_late_fee_phrase_alone() {
        let table = rules();
        let rule = table.first_match("how much is the late fee").unwrap();
        assert_eq!(rule.name, "late_payment");
    }

    #[test]
    fn test_late_alone_does_not_match_late_payment() {
        // "late" without "payment" falls through; nothing else matches.
        assert!(rules().first_match("i will be late tonight").is_none());
    }

    // ---- Precedence between overlapping rules ----

    #[test]
    fn test_late_payment_beats_rent_due() {
        // Mentions rent being due AND a late payment; the earlier rule answers.
        let table = rules();
        let rule = table
            .first_match("when is rent due and what if my payment is late")
            .unwrap();
        assert_eq!(rule.name, "late_payment");
    }

    #[test]
    fn test_rent_due_phrase() {
        let table = rules();
        let rule = table.first_match("is rent due soon").unwrap();
        assert_eq!(rule.name, "rent_due");
    }

    // ---- Office hours ----

    #[test]
    fn test_office_hours_exact_response() {
        let table = rules();
        let rule = table.first_match("What are your office hours?").unwrap();
        assert_eq!(rule.name, "office_hours");
        assert_eq!(
            rule.response,
            "Our leasing office is open Monday\u{2013}Friday from 9am\u{2013}5pm and Saturday 10am\u{2013}4pm. We are closed on Sundays and major holidays."
        );
    }

    #[test]
    fn test_hours_and_open() {
        let table = rules();
        let rule = table.first_match("what hours are you open").unwrap();
        assert_eq!(rule.name, "office_hours");
    }

    // ---- Package delivery ----

    #[test]
    fn test_package_requires_delivery_term() {
        let table = rules();
        assert_eq!(
            table
                .first_match("when will my package be delivered")
                .unwrap()
                .name,
            "package_delivery"
        );
        assert!(table.first_match("i got a package").is_none());
    }

    // ---- Maintenance ----

    #[test]
    fn test_maintenance_with_request_term() {
        let table = rules();
        let rule = table
            .first_match("how do I submit a maintenance request")
            .unwrap();
        assert_eq!(rule.name, "maintenance");
    }

    #[test]
    fn test_broken_with_how() {
        let table = rules();
        let rule = table.first_match("my sink is broken, how do I fix it").unwrap();
        assert_eq!(rule.name, "maintenance");
    }

    // ---- Parking ----

    #[test]
    fn test_parking_single_keyword() {
        let table = rules();
        let rule = table.first_match("do you have guest parking").unwrap();
        assert_eq!(rule.name, "parking");
    }

    // ---- Move-out ----

    #[test]
    fn test_move_out_hyphenated() {
        let table = rules();
        let rule = table.first_match("what is the move-out policy").unwrap();
        assert_eq!(rule.name, "move_out");
    }

    // ---- Contact ----

    #[test]
    fn test_contact_office() {
        let table = rules();
        let rule = table.first_match("how do I contact the office").unwrap();
        assert_eq!(rule.name, "contact");
    }

    #[test]
    fn test_contact_alone_falls_through() {
        assert!(rules().first_match("my contact lens fell").is_none());
    }

    // ---- Utilities ----

    #[test]
    fn test_utilities_keyword_alone() {
        let table = rules();
        let rule = table.first_match("are utilities extra").unwrap();
        assert_eq!(rule.name, "utilities");
    }

    #[test]
    fn test_internet_and_included() {
        let table = rules();
        let rule = table.first_match("is internet included").unwrap();
        assert_eq!(rule.name, "utilities");
    }

    #[test]
    fn test_water_without_billing_term_falls_through() {
        assert!(rules().first_match("the water is cold").is_none());
    }

    // ---- Thanks ----

    #[test]
    fn test_thanks_variants() {
        let table = rules();
        for input in ["thank you", "thanks!", "thx"] {
            assert_eq!(table.first_match(input).unwrap().name, "thanks");
        }
    }

    // ---- Loose substring matching ----

    #[test]
    fn test_spot_inside_longer_word_triggers_parking() {
        // "spotless" contains "spot".
        let table = rules();
        let rule = table.first_match("the lobby is spotless").unwrap();
        assert_eq!(rule.name, "parking");
    }

    // ---- No match ----

    #[test]
    fn test_unmatched_question_returns_none() {
        assert!(rules()
            .first_match("do you allow pets on the rooftop lounge")
            .is_none());
    }

    #[test]
    fn test_apology_mentions_contact_number() {
        assert!(APOLOGY.contains("(555) 123-4567"));
    }
}
