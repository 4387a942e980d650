//! Built-in salon knowledge — literal keyword rules, first match wins.

/// What the agent tells a caller when nobody knows the answer yet.
pub const FALLBACK_PHRASE: &str = "Let me check with my supervisor and get back to you.";

/// A keyword rule: any keyword contained in the lowercased question fires it.
#[derive(Debug, Clone, Copy)]
pub struct LocalRule {
    pub keywords: &'static [&'static str],
    pub answer: &'static str,
}

impl LocalRule {
    fn matches(&self, question_lower: &str) -> bool {
        self.keywords.iter().any(|kw| question_lower.contains(kw))
    }
}

/// Glow & Go Salon, in priority order.
///
/// "price" and "cost" are deliberately absent: without a service keyword
/// there is nothing to quote, so those questions escalate.
pub const SALON_RULES: &[LocalRule] = &[
    LocalRule {
        keywords: &["open", "hours"],
        answer: "We are open Mon-Fri 9am-6pm and Sat 10am-4pm; closed Sun.",
    },
    LocalRule {
        keywords: &["haircut"],
        answer: "A haircut is $40.",
    },
    LocalRule {
        keywords: &["manicure"],
        answer: "A manicure is $25.",
    },
    LocalRule {
        keywords: &["color", "colour"],
        answer: "Hair color is $80.",
    },
];

/// An ordered rule table. Keywords must be lowercase.
#[derive(Debug, Clone, Copy)]
pub struct RuleBook {
    rules: &'static [LocalRule],
}

impl Default for RuleBook {
    fn default() -> Self {
        Self::salon()
    }
}

impl RuleBook {
    pub fn new(rules: &'static [LocalRule]) -> Self {
        Self { rules }
    }

    pub fn salon() -> Self {
        Self::new(SALON_RULES)
    }

    /// Answer from the first matching rule, if any.
    pub fn answer(&self, question: &str) -> Option<&'static str> {
        let q = question.to_lowercase();
        self.rules.iter().find(|r| r.matches(&q)).map(|r| r.answer)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
