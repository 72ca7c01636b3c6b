//! # Essay Template
//!
//! The demo generator's only "intelligence": a fixed essay with the topic
//! substituted in. The citation style is written as a label under the
//! References heading and nowhere else; the reference list itself is the
//! same for every style.

use crate::core::request::EssayRequest;

/// Builds the essay text for a request snapshot.
pub fn build_essay(request: &EssayRequest) -> String {
    let topic = &request.topic;
    let style = request.citation_style;

    let mut essay = String::new();
    essay.push_str(&format!("# {topic}\n\n"));

    essay.push_str("## Introduction\n\n");
    essay.push_str(&format!(
        "This essay explores the fundamental concepts and methodologies surrounding {topic}. \
         Through rigorous analysis and evidence-based reasoning, we examine the key perspectives \
         that shape our understanding of this subject.\n\n"
    ));

    essay.push_str("## Main Body\n\n");
    essay.push_str(&format!(
        "According to Smith (2023), the primary framework for analyzing this topic requires a \
         multidisciplinary approach. Recent studies have demonstrated that \"{topic} represents a \
         significant area of academic inquiry\" (Johnson & Lee, 2024, p. 45).\n\n"
    ));
    essay.push_str(
        "Furthermore, the implications of these findings extend beyond theoretical considerations. \
         As noted by Williams et al. (2023), practical applications in this domain have shown \
         promising results in various contexts.\n\n",
    );

    essay.push_str("## Conclusion\n\n");
    essay.push_str(&format!(
        "In conclusion, the examination of {topic} reveals the complexity inherent in contemporary \
         academic discourse. Future research should continue to explore these dimensions to advance \
         our collective understanding.\n\n"
    ));

    essay.push_str("## References\n\n");
    essay.push_str(&format!("*Citation style: {}*\n\n", style.label()));
    for (i, reference) in REFERENCES.iter().enumerate() {
        essay.push_str(reference);
        if i + 1 < REFERENCES.len() {
            essay.push_str("\n\n");
        }
    }

    essay
}

const REFERENCES: [&str; 3] = [
    "Johnson, A., & Lee, B. (2024). *Contemporary Perspectives in Academic Research*. University Press.",
    "Smith, C. (2023). Methodological Frameworks for Analysis. *Journal of Academic Studies*, 15(3), 234-256.",
    "Williams, D., Brown, E., & Davis, F. (2023). Practical Applications in Modern Scholarship. \
     *Review of Educational Research*, 28(2), 112-130.",
];
