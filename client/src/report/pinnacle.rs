use super::{
    AwarenessCompetitor, AwarenessData, CompanyId, CompanyReport, CompanySummary, CompetitionCompetitor, CompetitionData,
    Construct, ConstructKind, MarketPosition, PerceptionCompetitor, PerceptionData, SentimentSource, SocialChannel,
    Subconstruct, Swot, Valuation,
};

pub(super) static REPORT: CompanyReport = CompanyReport {
    id: CompanyId::Pinnacle,
    summary: CompanySummary {
        name: "Pinnacle Financial Partners",
        overall_score: 11,
        status: "Critically Behind",
        key_strengths: &["LinkedIn followers (40% of industry benchmark)"],
        areas_for_improvement: &[
            "Nearly non-existent social media (1-2% of benchmarks)",
            "High bounce rate (194% of industry average)",
            "Very low website traffic (20% of benchmark)",
        ],
    },
    valuation: Valuation { amount_usd: 2_500_000, change: "+5.2%" },
    constructs: [
        Construct {
            kind: ConstructKind::Awareness,
            value: 11,
            details: "Your brand awareness is critically low compared to competitors. This measures how visible your brand is across digital channels including website traffic, social media, and media mentions.",
        },
        Construct {
            kind: ConstructKind::Perception,
            value: 62,
            details: "Brand perception measures how your brand is viewed by customers and the market. Your score indicates significant challenges in brand sentiment and market positioning.",
        },
        Construct {
            kind: ConstructKind::Competition,
            value: 18,
            details: "This measures how your brand performs against direct competitors in your market. Your competitive position is significantly weaker than major players in your industry.",
        },
    ],
    awareness: AwarenessData {
        score: 11,
        traffic: 9,
        engagement: 18,
        social: 6,
        status: "Critically Behind",
        social_channels: &[
            SocialChannel { name: "LinkedIn", score: 40, color: "#0077B5" },
            SocialChannel { name: "Facebook", score: 8, color: "#3B5998" },
            SocialChannel { name: "X", score: 5, color: "#000000" },
            SocialChannel { name: "Instagram", score: 2, color: "#E1306C" },
        ],
        competitors: &[
            AwarenessCompetitor {
                name: "Truist Bank",
                score: 87,
                status: "Strong Performer",
                traffic: 100,
                engagement: 67,
                social: 89,
                key_strengths: &[
                    "445% of industry benchmark for website traffic",
                    "359% of industry benchmark for Facebook followers",
                    "332% of industry benchmark for LinkedIn followers",
                ],
                areas_for_improvement: &["No significant weaknesses compared to industry benchmarks"],
            },
            AwarenessCompetitor {
                name: "Regions Bank",
                score: 77,
                status: "Strong Performer",
                traffic: 85,
                engagement: 65,
                social: 77,
                key_strengths: &[
                    "293% of industry benchmark for Facebook followers",
                    "296% of industry benchmark for LinkedIn followers",
                    "198% of industry benchmark for website traffic",
                ],
                areas_for_improvement: &["Instagram presence (58% of industry benchmark)"],
            },
            AwarenessCompetitor {
                name: "First Horizon",
                score: 44,
                status: "Below Average",
                traffic: 22,
                engagement: 87,
                social: 28,
                key_strengths: &[
                    "197% of industry benchmark for pages per visit",
                    "169% of industry benchmark for visitor time",
                    "Low bounce rate (43% of industry average)",
                ],
                areas_for_improvement: &[
                    "Weak Instagram presence (32% of benchmark)",
                    "Low X following (34% of benchmark)",
                    "Limited website traffic (54% of benchmark)",
                ],
            },
            AwarenessCompetitor {
                name: "Old National Bank",
                score: 26,
                status: "Underperformer",
                traffic: 11,
                engagement: 66,
                social: 7,
                key_strengths: &["Decent user engagement metrics", "Low bounce rate (62% of industry average)"],
                areas_for_improvement: &[
                    "Very weak social media presence overall",
                    "LinkedIn & Instagram only 3% of industry benchmarks",
                    "Low website traffic (23% of benchmark)",
                ],
            },
        ],
        subconstructs: &[
            Subconstruct {
                name: "Website Traffic",
                score: 20,
                description: "Only 20% of industry benchmark for total visitors",
            },
            Subconstruct {
                name: "Bounce Rate",
                score: 15,
                description: "194% of industry average - visitors leave quickly",
            },
            Subconstruct {
                name: "Social Followers",
                score: 10,
                description: "Critically low follower counts across platforms",
            },
            Subconstruct { name: "Media Presence", score: 8, description: "Almost no presence in industry publications" },
            Subconstruct { name: "Brand Mentions", score: 12, description: "Very low mention volume across all channels" },
        ],
        recommendations: &[
            "Develop a comprehensive social media strategy starting with LinkedIn",
            "Implement analytics to understand why bounce rate is so high (194% of average)",
            "Invest in SEO to improve website traffic (currently only 20% of benchmark)",
            "Begin regular content publishing to increase brand mentions",
        ],
    },
    perception: PerceptionData {
        score: 62,
        status: "Good",
        details: "Your brand perception metrics show positive overall sentiment, with consistent ratings across news media and social channels. Customer reviews reflect strong satisfaction, though some service aspects require attention.",
        subconstructs: &[
            Subconstruct {
                name: "News Sentiment",
                score: 55,
                description: "Your news sentiment is on par with industry peers.",
            },
            Subconstruct {
                name: "Social Sentiment",
                score: 66,
                description: "Your social sentiment is above average for the banking sector.",
            },
            Subconstruct {
                name: "Customer Reviews",
                score: 66,
                description: "Customer reviews reflect strong satisfaction with your services.",
            },
        ],
        sources: &[
            SentimentSource {
                name: "News Sentiment",
                score: 55,
                label: None,
                note: None,
                positive: &[
                    "Your news sentiment score of 0.55 (55/100) is considered neutral to slightly positive.",
                    "This score is on par with industry peers (Truist: 0.55, Regions: 0.56, First Horizon: 0.57, Old National: 0.55).",
                ],
                neutral: &[],
                negative: &[],
            },
            SentimentSource {
                name: "Social Sentiment",
                score: 66,
                label: Some("Facebook"),
                note: None,
                positive: &[
                    "Your Facebook sentiment score of 0.66 (66/100) is above the industry average.",
                    "Community-focused and celebratory posts generate strong positive sentiment and engagement.",
                    "Posts highlighting team traditions, client appreciation, and social causes foster positive interactions and brand trust.",
                ],
                neutral: &[],
                negative: &[
                    "Lack of engagement in certain posts leads to weaker sentiment scores, indicating a need for more interactive content.",
                    "Unaddressed service concerns or promotional posts with unclear benefits can contribute to negative sentiment trends.",
                ],
            },
            SentimentSource {
                name: "Customer Reviews",
                score: 66,
                label: None,
                note: Some("Average Rating: 4.06/5"),
                positive: &[
                    "Many customers value the personalized and friendly service provided by staff.",
                    "Security features and fraud prevention measures are commonly praised.",
                ],
                neutral: &[
                    "Branch hours and accessibility are a point of mixed feedback among customers.",
                    "Mobile banking services receive varied responses, with some customers finding them useful while others experience usability issues.",
                ],
                negative: &[
                    "Long wait times and inconsistent customer service contribute significantly to customer dissatisfaction.",
                    "Several customers report issues with account accessibility, transaction holds, and unexpected fees.",
                ],
            },
        ],
        metric_labels: ["News", "Social"],
        competitors: &[
            PerceptionCompetitor { name: "Truist", score: 59, metrics: [55, 64], status: "above average" },
            PerceptionCompetitor { name: "Regions", score: 50, metrics: [56, 44], status: "Fair" },
            PerceptionCompetitor { name: "First Horizon", score: 57, metrics: [57, 56], status: "Fair" },
            PerceptionCompetitor { name: "Old National", score: 43, metrics: [55, 30], status: "Poor" },
        ],
        recommendations: &[
            "Implement a more robust social media engagement strategy to respond promptly to customer concerns.",
            "Focus on improving mobile banking experience based on customer feedback.",
            "Develop a campaign highlighting your security features and fraud prevention measures.",
            "Address wait times and inconsistent service quality through staff training and process improvements.",
        ],
    },
    competition: CompetitionData {
        score: 18,
        status: "Critically Behind",
        details: "Your competitive position is significantly weaker than major players in your industry. While your perception metrics are positive, your critical awareness gap is severely limiting your competitive effectiveness.",
        position_summary: "and significantly behind market leaders. While you have some competitive advantages, your critical awareness gap limits your ability to compete effectively.",
        market_position: &[
            MarketPosition {
                name: "Market Share",
                score: 8,
                description: "Extremely low compared to industry leaders",
            },
            MarketPosition {
                name: "Growth Rate",
                score: 22,
                description: "Growing but much slower than industry average",
            },
            MarketPosition {
                name: "Differentiation",
                score: 31,
                description: "Limited brand differentiation in the marketplace",
            },
        ],
        swot: Swot {
            strengths: &[
                "Strong customer loyalty from existing clients",
                "Above-average perception scores among customers who know you",
                "Efficient internal processes with good cost management",
            ],
            weaknesses: &[
                "Very low market awareness hampering growth",
                "Limited digital footprint compared to competitors",
                "Smaller market share than key competitors",
            ],
            opportunities: &[
                "Expand digital presence to reach new customer segments",
                "Develop stronger brand differentiation strategy",
                "Leverage existing customer satisfaction for referral programs",
            ],
            threats: &[
                "Larger competitors with greater marketing budgets",
                "Market consolidation reducing available customer base",
                "Increasing customer acquisition costs in the industry",
            ],
        },
        competitors: &[
            CompetitionCompetitor {
                name: "Truist Bank",
                score: 83,
                awareness_score: 87,
                perception_score: 59,
                status: "Market Leader",
                key_strengths: &["Dominant market awareness", "Strong digital presence", "Scale advantages"],
            },
            CompetitionCompetitor {
                name: "Regions Bank",
                score: 76,
                awareness_score: 77,
                perception_score: 50,
                status: "Strong Performer",
                key_strengths: &["Established regional presence", "Strong branch network", "Effective marketing"],
            },
            CompetitionCompetitor {
                name: "First Horizon",
                score: 47,
                awareness_score: 44,
                perception_score: 57,
                status: "Average",
                key_strengths: &["Good customer perception", "Efficient operations", "Community involvement"],
            },
            CompetitionCompetitor {
                name: "Old National Bank",
                score: 32,
                awareness_score: 26,
                perception_score: 43,
                status: "Below Average",
                key_strengths: &["Local market focus", "Loyal customer base", "Traditional banking appeal"],
            },
        ],
        recommendations: &[
            "Develop targeted campaigns to increase awareness in key market segments",
            "Create a unique brand positioning to differentiate from larger competitors",
            "Leverage higher perception scores in marketing materials",
        ],
    },
};
