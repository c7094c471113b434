use super::{
    AwarenessCompetitor, AwarenessData, CompanyId, CompanyReport, CompanySummary, CompetitionCompetitor, CompetitionData,
    Construct, ConstructKind, MarketPosition, PerceptionCompetitor, PerceptionData, SentimentSource, SocialChannel,
    Subconstruct, Swot, Valuation,
};

pub(super) static REPORT: CompanyReport = CompanyReport {
    id: CompanyId::GhostCat,
    summary: CompanySummary {
        name: "Ghost-Cat Bikes",
        overall_score: 51,
        status: "Below Average",
        key_strengths: &[
            "Strong Instagram presence (12,500 followers)",
            "Good engagement metrics (low bounce rate)",
            "Growing social media audience (+8% MoM)",
        ],
        areas_for_improvement: &[
            "Very limited website traffic (14/100, lowest among competitors)",
            "Poor organic search visibility (28% of benchmark)",
            "Minimal presence on Facebook (929 followers) and X (15 followers)",
        ],
    },
    valuation: Valuation { amount_usd: 4_750_000, change: "+12.7%" },
    constructs: [
        Construct {
            kind: ConstructKind::Awareness,
            value: 51,
            details: "Your brand awareness is below average compared to top competitors. Your social media presence is strong, but website traffic is very limited and needs significant improvement.",
        },
        Construct {
            kind: ConstructKind::Perception,
            value: 60,
            details: "Brand perception measures how your brand is viewed by customers and the market. Your score indicates room for improvement in brand sentiment and customer perception.",
        },
        Construct {
            kind: ConstructKind::Competition,
            value: 32,
            details: "This measures how your brand performs against direct competitors in your market. Your position is below industry leaders but showing potential for growth.",
        },
    ],
    awareness: AwarenessData {
        score: 51,
        traffic: 14,
        engagement: 54,
        social: 86,
        status: "Below Average",
        social_channels: &[
            SocialChannel { name: "Instagram", score: 89, color: "#E1306C" },
            SocialChannel { name: "Facebook", score: 10, color: "#3B5998" },
            SocialChannel { name: "X", score: 9, color: "#000000" },
            SocialChannel { name: "LinkedIn", score: 0, color: "#0077B5" },
        ],
        competitors: &[
            AwarenessCompetitor {
                name: "Goat Power Bikes",
                score: 90,
                status: "Market Leader",
                traffic: 100,
                engagement: 69,
                social: 100,
                key_strengths: &[
                    "Highest website traffic among competitors (251,489 visits)",
                    "Strong social media presence (15,600 total followers)",
                    "Leading market position in awareness metrics",
                ],
                areas_for_improvement: &[
                    "Recent traffic decline (-38.76% monthly change)",
                    "Could improve engagement metrics (69/100)",
                ],
            },
            AwarenessCompetitor {
                name: "E-Cells",
                score: 58,
                status: "Average Performer",
                traffic: 43,
                engagement: 50,
                social: 80,
                key_strengths: &[
                    "Strong Facebook presence (9,700 followers)",
                    "Decent website traffic with positive growth (+16.49%)",
                    "Balanced performance across metrics",
                ],
                areas_for_improvement: &["High bounce rate (51.01%)", "Below average engagement metrics"],
            },
            AwarenessCompetitor {
                name: "Wired-Freedom",
                score: 40,
                status: "Below Average",
                traffic: 62,
                engagement: 58,
                social: 0,
                key_strengths: &[
                    "Good website traffic (155,032 visits)",
                    "Positive traffic growth trend (+24.67%)",
                    "Decent engagement metrics",
                ],
                areas_for_improvement: &["No social media presence at all", "Missing important marketing channels"],
            },
            AwarenessCompetitor {
                name: "Philodo",
                score: 41,
                status: "Below Average",
                traffic: 10,
                engagement: 100,
                social: 14,
                key_strengths: &[
                    "Exceptional engagement metrics (best in class)",
                    "Excellent visit duration (7:13 minutes)",
                    "Very low bounce rate (22.38%)",
                ],
                areas_for_improvement: &[
                    "Very low website traffic (26,083 visits)",
                    "Limited social presence (mainly on Facebook)",
                    "Overall awareness challenges",
                ],
            },
            AwarenessCompetitor {
                name: "Meelod",
                score: 28,
                status: "Underperformer",
                traffic: 23,
                engagement: 50,
                social: 12,
                key_strengths: &[
                    "Positive traffic growth trend (+46.91%)",
                    "Balanced desktop/mobile traffic",
                    "Average engagement metrics",
                ],
                areas_for_improvement: &[
                    "Low website traffic overall",
                    "Very limited social media presence",
                    "Needs fundamental awareness improvements",
                ],
            },
        ],
        subconstructs: &[
            Subconstruct {
                name: "Website Traffic",
                score: 14,
                description: "Very low traffic volume (14/100, lowest among competitors)",
            },
            Subconstruct {
                name: "Social Media Presence",
                score: 86,
                description: "Strong on Instagram (12,500 followers), minimal presence on other platforms",
            },
            Subconstruct {
                name: "Engagement Metrics",
                score: 54,
                description: "Good bounce rate (34.83%), average time on site",
            },
            Subconstruct {
                name: "Brand Search Volume",
                score: 32,
                description: "Limited organic search visibility for brand terms",
            },
            Subconstruct {
                name: "Industry Visibility",
                score: 40,
                description: "Below average presence in industry publications and forums",
            },
        ],
        recommendations: &[
            "Prioritize website traffic growth through SEO and marketing campaigns",
            "Leverage Instagram success to drive traffic to website",
            "Develop Facebook strategy to increase followers (currently only 929)",
            "Consider establishing LinkedIn presence for B2B opportunities",
            "Implement content marketing to improve organic search visibility",
        ],
    },
    perception: PerceptionData {
        score: 68,
        status: "Fair",
        details: "GhostCat Bikes shows a generally positive perception across YouTube reviews and Facebook engagement. Your products receive praise for performance and value, though some quality and durability concerns have been noted.",
        subconstructs: &[
            Subconstruct {
                name: "YouTube Sentiment",
                score: 60,
                description: "Product reviews show positive feedback on performance with some durability concerns.",
            },
            Subconstruct {
                name: "Facebook Sentiment",
                score: 59,
                description: "Social sentiment reflects positive engagement with room for improvement.",
            },
        ],
        sources: &[
            SentimentSource {
                name: "YouTube Sentiment",
                score: 60,
                label: Some("Neutral"),
                note: None,
                positive: &[
                    "GhostCat e-bikes receive consistent praise for their speed, power, and affordability compared to competitors.",
                    "Many reviewers appreciate the bike's off-road capability, citing strong suspension and handling.",
                ],
                neutral: &[
                    "Battery performance opinions vary, with some reviews highlighting long range while others mention faster-than-expected drain.",
                    "The weight of the bike is noted differently across reviews, with some finding it manageable while others struggle with transport.",
                ],
                negative: &[
                    "Durability concerns appear in multiple reviews, with mentions of material quality and long-term reliability.",
                    "Seat comfort is a frequent complaint, with some riders experiencing discomfort on extended rides.",
                ],
            },
            SentimentSource {
                name: "Facebook Sentiment",
                score: 59,
                label: Some("Neutral"),
                note: None,
                positive: &[
                    "Posts announcing new partnerships or expansions consistently generate positive sentiment.",
                    "Interactive posts where customers share experiences result in stronger engagement and approval.",
                ],
                neutral: &[
                    "Inventory updates and logistics content generally produce neutral responses unless tied to service issues.",
                    "Aesthetic or vague promotional posts gain visibility but offer limited emotional or transactional impact.",
                ],
                negative: &[
                    "Posts lacking comments and engagement often perform poorly in sentiment despite product optimism.",
                    "Limited customer feedback or questions left unanswered can lead to reduced perceived support.",
                ],
            },
        ],
        metric_labels: ["YouTube", "Facebook"],
        competitors: &[
            PerceptionCompetitor { name: "Goat Power", score: 72, metrics: [68, 76], status: "Good" },
            PerceptionCompetitor { name: "E-Cells", score: 65, metrics: [62, 68], status: "Fair" },
            PerceptionCompetitor { name: "CycleBot", score: 59, metrics: [55, 63], status: "Fair" },
        ],
        recommendations: &[
            "Address durability and comfort concerns in your product development roadmap.",
            "Increase engagement on social media posts by answering customer questions promptly.",
            "Create more interactive content asking for customer experiences and feedback.",
            "Highlight your bikes' performance and value proposition in marketing materials.",
        ],
    },
    competition: CompetitionData {
        score: 32,
        status: "Below Average",
        details: "Your competitive position ranks 4th in a field of 6 major competitors. Your strong Instagram presence provides competitive advantages, but limited website traffic and broader market visibility restrict your ability to compete effectively with market leaders.",
        position_summary: "compared to competitors. You have some strong areas, particularly in social media, but trail behind market leaders in overall competitive position.",
        market_position: &[
            MarketPosition { name: "Market Share", score: 22, description: "Limited share in a growing market" },
            MarketPosition { name: "Growth Rate", score: 45, description: "Growing at industry average rate" },
            MarketPosition {
                name: "Differentiation",
                score: 58,
                description: "Good design differentiation but limited feature differentiation",
            },
        ],
        swot: Swot {
            strengths: &[
                "Strong Instagram following creating brand visibility",
                "Good customer engagement metrics",
                "Distinct visual identity and brand aesthetic",
            ],
            weaknesses: &[
                "Very limited website traffic compared to competitors",
                "Minimal presence on platforms beyond Instagram",
                "Product durability concerns affecting competitive position",
            ],
            opportunities: &[
                "Convert Instagram followers to website visitors",
                "Expand to LinkedIn for B2B sales opportunities",
                "Address durability concerns to compete on quality",
            ],
            threats: &[
                "Market leader (Goat Power) with much stronger metrics",
                "New entrants with heavy marketing investment",
                "Established competitors with broader product lines",
            ],
        },
        competitors: &[
            CompetitionCompetitor {
                name: "Goat Power",
                score: 86,
                awareness_score: 90,
                perception_score: 72,
                status: "Market Leader",
                key_strengths: &["Dominant market awareness", "Strong website traffic", "Best-in-class perception"],
            },
            CompetitionCompetitor {
                name: "E-Cells",
                score: 59,
                awareness_score: 58,
                perception_score: 65,
                status: "Above Average",
                key_strengths: &["Balanced marketing approach", "Strong Facebook presence", "Good perception metrics"],
            },
            CompetitionCompetitor {
                name: "Wired-Freedom",
                score: 42,
                awareness_score: 40,
                perception_score: 47,
                status: "Average",
                key_strengths: &["Good website traffic", "Growing brand", "Focused marketing strategy"],
            },
            CompetitionCompetitor {
                name: "Philodo",
                score: 39,
                awareness_score: 41,
                perception_score: 38,
                status: "Below Average",
                key_strengths: &["Excellent engagement metrics", "Loyal customer base", "Efficient conversion"],
            },
            CompetitionCompetitor {
                name: "Meelod",
                score: 26,
                awareness_score: 28,
                perception_score: 23,
                status: "Underperformer",
                key_strengths: &["Rapid recent growth", "Budget pricing", "Niche market focus"],
            },
        ],
        recommendations: &[
            "Leverage Instagram success to drive website traffic",
            "Develop targeted campaigns to highlight product differentiation",
            "Address product durability issues to compete on quality metrics",
            "Expand social presence beyond Instagram to reach new markets",
        ],
    },
};
