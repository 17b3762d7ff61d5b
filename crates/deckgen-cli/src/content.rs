//! The deck content.
//!
//! One record per output slide, in presentation order. This list is the
//! whole input of the program: it is defined once, consumed once per run,
//! and never mutated.

use deckgen_pptx::{SlideRecord, TableBlock};

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The slide records of the migration blueprint deck
pub fn deck_slides() -> Vec<SlideRecord> {
    vec![
        SlideRecord::title_slide(
            "AI-Powered Migration Blueprint",
            lines(&["Innovation Showcase 2025", "December 14, 2025"]),
        )
        .with_subtitle("Accelerating Spring Boot to Node.js Transitions"),
        SlideRecord::bullets(
            "Use Case: What Problem Are We Solving?",
            lines(&[
                "Teams struggle to migrate legacy Spring Boot apps to modern Node.js",
                "Manual migration is time-consuming and error-prone",
                "Maintaining functional parity is difficult",
                "Knowledge gaps between Java/Spring and JavaScript/Node ecosystems",
                "Delays, risk of bugs, inconsistent patterns, high experimentation costs",
            ]),
        ),
        SlideRecord::bullets(
            "Approach: AI Tools & Methodology",
            lines(&[
                "AI Tool: GitHub Copilot (Claude Sonnet 4.5)",
                "Intelligent scaffolding: Spring Boot layers, validation, tests",
                "Parallel migration: Node.js mirrors Spring controllers/services/repos",
                "Contract verification: OpenAPI, parity testing, identical seed data",
            ]),
        ),
        SlideRecord::table(
            "Impact: Time Saved",
            TableBlock::new(
                ["Task", "Manual", "AI-Assisted", "Savings"],
                [
                    vec!["Spring scaffold", "2-3 days", "15 minutes", "95%"],
                    vec!["Node migration", "4-5 days", "20 minutes", "96%"],
                    vec!["Test setup", "1-2 days", "10 minutes", "97%"],
                    vec!["Documentation", "1 day", "5 minutes", "98%"],
                    vec!["TOTAL", "8-11 days", "~50 minutes", "96%"],
                ],
            ),
        ),
        SlideRecord::bullets(
            "Impact: Quality Improvements",
            lines(&[
                "Zero syntax errors in generated code",
                "Consistent patterns across stacks (controller/service/repo)",
                "Production-ready validation, error handling, logging",
                "Complete test coverage structure (MockMvc, Jest/Supertest)",
                "Dockerfile + OpenAPI included",
            ]),
        ),
        SlideRecord::bullets(
            "Creative Innovations",
            lines(&[
                "Migration blueprint mono-repo template",
                "Living documentation via identical API contracts",
                "Zero-config paired demos",
                "Layered architecture mapping (controller/service/repo)",
            ]),
        ),
        SlideRecord::bullets(
            "What We Built (Structure)",
            lines(&[
                "packages/spring-app: controllers, services, repositories, DTOs, exceptions, Dockerfile, OpenAPI",
                "packages/node-migration: routes, services, repositories, validators, middleware, Dockerfile",
            ]),
        ),
        SlideRecord::bullets(
            "Live Demo: API Parity",
            lines(&[
                "Spring Boot (8080): GET /api/products → Widget, Gadget",
                "Node.js (4000): GET /api/products → Widget, Gadget",
                "Identical responses validate migration",
            ]),
        ),
        SlideRecord::bullets(
            "Judging Criteria Alignment",
            lines(&[
                "Practicality: solves a real migration problem",
                "Impact: ~96% time reduction; lower risk",
                "Creativity: mono-repo blueprint + contract-first",
                "Replicability: clean structure, minimal deps, forkable",
                "Presentation: clear metrics, demos, mapping",
            ]),
        ),
        SlideRecord::bullets(
            "How Others Can Adopt",
            lines(&[
                "Clone: https://github.com/kanchanakm8/spring-app",
                "Customize domain model (replace Product)",
                "Run side-by-side: Spring jar + Node start",
                "Compare outputs via curl to validate",
            ]),
        ),
        SlideRecord::bullets(
            "ROI Calculation",
            lines(&[
                "Traditional: $6.4K-$8.8K (8-11 days)",
                "AI-Assisted: ~$800 (1 day)",
                "Savings per project: $5.6K-$8K; 10 teams → $56K-$80K",
            ]),
        ),
        SlideRecord::bullets(
            "Key Takeaways",
            lines(&[
                "AI accelerates migration discovery by 20-50x",
                "Pattern-based translation bridges frameworks",
                "Mono-repo + contracts = reusable templates",
                "Small innovations compound value",
            ]),
        ),
        SlideRecord::bullets(
            "Conclusion",
            lines(&[
                "Weeks-long migration → 50-minute AI-assisted exercise",
                "Reusable blueprint; AI-powered translation; contract-verified parity",
                "Production-ready structure; 96% time reduction",
                "Call to action: adopt this blueprint",
            ]),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use deckgen_pptx::SlideStyle;

    #[test]
    fn test_deck_has_thirteen_slides() {
        assert_eq!(deck_slides().len(), 13);
    }

    #[test]
    fn test_every_title_is_non_empty() {
        for slide in deck_slides() {
            assert!(!slide.title.trim().is_empty());
        }
    }

    #[test]
    fn test_opening_slide_is_title_style() {
        let slides = deck_slides();
        assert_eq!(slides[0].style, SlideStyle::Title);
        assert_eq!(slides[0].bullets.len(), 2);
        assert_eq!(
            slides[0].subtitle.as_deref(),
            Some("Accelerating Spring Boot to Node.js Transitions")
        );
    }

    #[test]
    fn test_single_table_slide_is_rectangular() {
        let slides = deck_slides();
        let tables: Vec<_> = slides
            .iter()
            .filter(|s| s.style == SlideStyle::Table)
            .collect();

        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].title, "Impact: Time Saved");

        let table = tables[0].table.as_ref().unwrap();
        assert_eq!(table.column_count(), 4);
        assert_eq!(table.rows.len(), 5);
        assert!(table.first_ragged_row().is_none());
    }

    #[test]
    fn test_remaining_slides_are_bullets() {
        let bullet_count = deck_slides()
            .iter()
            .filter(|s| s.style == SlideStyle::Bullets)
            .count();
        assert_eq!(bullet_count, 11);
    }
}
