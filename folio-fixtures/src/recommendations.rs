//! Static per-sector recommendation tables and the rating-sorted aggregate.

use std::cmp::Reverse;
use std::sync::LazyLock;

use chrono::NaiveDate;
use folio_types::{Rating, Recommendation, Sector};

/// Per-sector recommendation list; empty for sectors without coverage.
#[must_use]
pub fn by_sector(sector: Sector) -> Vec<Recommendation> {
    match sector {
        Sector::Ai => ai(),
        Sector::Blockchain => blockchain(),
        Sector::Robotics => robotics(),
        Sector::Genomics => genomics(),
        Sector::Space => space(),
        Sector::Manufacturing => manufacturing(),
        Sector::Fintech => fintech(),
        Sector::Internet => internet(),
        Sector::Mobility => mobility(),
    }
}

/// Per-sector recommendation list looked up by route key.
/// Unknown keys degrade to an empty list rather than an error.
#[must_use]
pub fn by_sector_key(key: &str) -> Vec<Recommendation> {
    Sector::from_key(key).map(by_sector).unwrap_or_default()
}

/// The "all" aggregate: every sector's list concatenated in sector
/// declaration order, stably sorted descending by rating rank. Built once.
#[must_use]
pub fn all() -> &'static [Recommendation] {
    static ALL: LazyLock<Vec<Recommendation>> = LazyLock::new(|| {
        let mut out: Vec<Recommendation> =
            Sector::ALL.into_iter().flat_map(by_sector).collect();
        // Stable sort keeps per-sector insertion order within equal ratings.
        out.sort_by_key(|r| Reverse(r.rating.rank()));
        out
    });
    &ALL
}

/// First entry of the aggregate whose ticker matches case-insensitively.
#[must_use]
pub fn by_symbol(ticker: &str) -> Option<Recommendation> {
    all()
        .iter()
        .find(|r| r.ticker.eq_ignore_ascii_case(ticker))
        .cloned()
}

#[allow(clippy::too_many_arguments)]
fn rec(
    sector: Sector,
    ticker: &str,
    company_name: &str,
    price: f64,
    change_percent: f64,
    rating: Rating,
    target_price: f64,
    upside_percent: f64,
    analyst: &str,
    date: &str,
    summary: &str,
    key_points: &[&str],
    risks: &[&str],
) -> Recommendation {
    Recommendation {
        ticker: ticker.to_string(),
        company_name: company_name.to_string(),
        sector,
        price,
        change_percent,
        rating,
        target_price,
        upside_percent,
        analyst: Some(analyst.to_string()),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        summary: summary.to_string(),
        key_points: key_points.iter().map(ToString::to_string).collect(),
        risks: risks.iter().map(ToString::to_string).collect(),
    }
}

fn ai() -> Vec<Recommendation> {
    vec![
        rec(
            Sector::Ai,
            "NVDA",
            "NVIDIA Corporation",
            950.25,
            3.75,
            Rating::StrongBuy,
            1200.00,
            26.28,
            "Sarah Chen",
            "2025-02-28",
            "NVIDIA continues to dominate the AI chip market with its cutting-edge GPUs and AI accelerators. The company is well-positioned to benefit from the growing demand for AI infrastructure.",
            &[
                "Market leader in AI chips with over 80% market share in training GPUs",
                "Strong growth in data center revenue, up 78% year-over-year",
                "Expanding software ecosystem with CUDA and AI Enterprise suite",
                "New Blackwell architecture provides 4x performance improvement over previous generation",
            ],
            &[
                "Increasing competition from AMD, Intel, and custom AI chips",
                "High valuation with P/E ratio above industry average",
                "Potential slowdown in consumer GPU demand",
            ],
        ),
        rec(
            Sector::Ai,
            "GOOG",
            "Alphabet Inc.",
            187.45,
            1.25,
            Rating::Buy,
            225.00,
            20.03,
            "Michael Johnson",
            "2025-02-25",
            "Google's Gemini AI models are showing strong performance against competitors, and the company is effectively monetizing AI across its product suite.",
            &[
                "Gemini Ultra outperforms competitors in most AI benchmarks",
                "Successfully integrating AI features across Google Workspace and Search",
                "Google Cloud growing at 35% with AI services driving adoption",
                "Strong balance sheet with over $100B in cash",
            ],
            &[
                "Regulatory scrutiny and potential antitrust actions",
                "Increasing competition in the AI space from Microsoft and OpenAI",
                "Ad revenue growth may slow in economic downturn",
            ],
        ),
        rec(
            Sector::Ai,
            "AMD",
            "Advanced Micro Devices, Inc.",
            205.78,
            -1.45,
            Rating::Buy,
            250.00,
            21.49,
            "David Kim",
            "2025-02-20",
            "AMD is gaining market share in the AI chip space with its MI300 accelerators, while continuing to perform well in CPUs against Intel.",
            &[
                "MI300 accelerators showing strong performance in inference workloads",
                "Expanding partnerships with major cloud providers",
                "EPYC server CPUs continue to gain market share from Intel",
                "Diversified revenue streams across consumer, enterprise, and embedded markets",
            ],
            &[
                "Intense competition from NVIDIA in the AI accelerator market",
                "Potential cyclical downturn in semiconductor industry",
                "Supply chain constraints could limit growth",
            ],
        ),
    ]
}

fn blockchain() -> Vec<Recommendation> {
    vec![
        rec(
            Sector::Blockchain,
            "COIN",
            "Coinbase Global, Inc.",
            315.67,
            5.32,
            Rating::Buy,
            380.00,
            20.38,
            "Jessica Wong",
            "2025-02-27",
            "Coinbase is benefiting from increased institutional adoption of cryptocurrencies and growing revenue from staking and other services beyond trading.",
            &[
                "Institutional trading volume up 120% year-over-year",
                "Diversifying revenue with staking, custody, and Coinbase Cloud",
                "Strong regulatory position compared to competitors",
                "Growing user base with over 110 million verified users",
            ],
            &[
                "Regulatory uncertainty in key markets",
                "Trading volume highly dependent on crypto market volatility",
                "Increasing competition from traditional financial institutions",
            ],
        ),
        rec(
            Sector::Blockchain,
            "SQ",
            "Block, Inc.",
            87.45,
            2.15,
            Rating::Buy,
            110.00,
            25.79,
            "Robert Chen",
            "2025-02-22",
            "Block's Cash App and TBD division are making significant strides in cryptocurrency adoption and blockchain infrastructure development.",
            &[
                "Cash App Bitcoin revenue growing at 25% annually",
                "TBD building open developer platform for decentralized finance",
                "Strong synergies between traditional fintech and crypto offerings",
                "Strategic bitcoin reserves providing balance sheet strength",
            ],
            &[
                "Regulatory challenges in cryptocurrency operations",
                "Intense competition in payment processing space",
                "Economic downturn could impact small business customers",
            ],
        ),
        rec(
            Sector::Blockchain,
            "MSTR",
            "MicroStrategy Incorporated",
            1450.25,
            -25.75,
            Rating::Hold,
            1500.00,
            3.43,
            "Thomas Wilson",
            "2025-02-18",
            "MicroStrategy continues its bitcoin acquisition strategy while maintaining its enterprise software business. The stock remains highly correlated with bitcoin price movements.",
            &[
                "Holds over 200,000 bitcoins on balance sheet",
                "Software business provides stable cash flow",
                "Strong liquidity position with recent convertible note offerings",
                "Management committed to long-term bitcoin strategy",
            ],
            &[
                "Extreme exposure to bitcoin price volatility",
                "Potential impairment charges during crypto market downturns",
                "Core software business growing slower than competitors",
                "Regulatory uncertainty around corporate bitcoin holdings",
            ],
        ),
    ]
}

fn robotics() -> Vec<Recommendation> {
    vec![
        rec(
            Sector::Robotics,
            "ABB",
            "ABB Ltd",
            47.85,
            0.95,
            Rating::Buy,
            58.00,
            21.21,
            "Emma Schmidt",
            "2025-02-26",
            "ABB is a global leader in industrial automation and robotics, well-positioned to benefit from the growing trend of factory automation and reshoring.",
            &[
                "Strong portfolio of collaborative robots for manufacturing",
                "Growing service revenue providing recurring income",
                "Benefiting from reshoring trends in North America and Europe",
                "Leading position in industrial automation software",
            ],
            &[
                "Cyclical exposure to industrial capital expenditure",
                "Increasing competition from Chinese robotics manufacturers",
                "Supply chain constraints affecting delivery times",
            ],
        ),
        rec(
            Sector::Robotics,
            "ISRG",
            "Intuitive Surgical, Inc.",
            425.30,
            7.85,
            Rating::StrongBuy,
            520.00,
            22.27,
            "Dr. James Miller",
            "2025-02-24",
            "Intuitive Surgical maintains its dominant position in robotic surgery with its da Vinci systems, with growing procedure volumes and expanding applications.",
            &[
                "Installed base of over 8,500 da Vinci systems globally",
                "Procedure volume growing at 15% annually",
                "High barriers to entry due to regulatory approvals and surgeon training",
                "Expanding into new surgical specialties beyond core applications",
            ],
            &[
                "High valuation compared to medical device peers",
                "Emerging competition from Medtronic and Johnson & Johnson",
                "Potential pricing pressure from hospital consolidation",
            ],
        ),
        rec(
            Sector::Robotics,
            "ROK",
            "Rockwell Automation, Inc.",
            310.45,
            -2.35,
            Rating::Buy,
            360.00,
            15.96,
            "Patricia Lee",
            "2025-02-20",
            "Rockwell Automation is benefiting from the industrial IoT trend and increased demand for smart manufacturing solutions.",
            &[
                "Leading provider of industrial automation and information solutions",
                "Growing software and services revenue with higher margins",
                "Strong position in industrial IoT with FactoryTalk platform",
                "Benefiting from Industry 4.0 adoption and reshoring trends",
            ],
            &[
                "Cyclical exposure to manufacturing capital expenditure",
                "Increasing competition in industrial software",
                "Potential slowdown in key verticals like automotive",
            ],
        ),
    ]
}

fn genomics() -> Vec<Recommendation> {
    vec![
        rec(
            Sector::Genomics,
            "CRSP",
            "CRISPR Therapeutics AG",
            87.65,
            4.25,
            Rating::StrongBuy,
            120.00,
            36.91,
            "Dr. Sarah Johnson",
            "2025-02-28",
            "CRISPR Therapeutics is at the forefront of gene editing technology with multiple programs in clinical trials and a recently approved therapy for sickle cell disease.",
            &[
                "First approved CRISPR-based therapy with Vertex for sickle cell disease",
                "Strong pipeline of wholly-owned immuno-oncology programs",
                "Robust intellectual property position in CRISPR/Cas9 technology",
                "Healthy balance sheet with over $2B in cash",
            ],
            &[
                "Clinical trial risks for pipeline programs",
                "Competitive landscape in gene editing is intensifying",
                "Regulatory and ethical challenges with new genetic technologies",
            ],
        ),
        rec(
            Sector::Genomics,
            "ILMN",
            "Illumina, Inc.",
            145.30,
            -3.45,
            Rating::Buy,
            180.00,
            23.88,
            "Michael Chen",
            "2025-02-25",
            "Illumina maintains its leadership in DNA sequencing technology with new platforms offering lower costs and higher throughput.",
            &[
                "Market leader in next-generation sequencing with over 70% market share",
                "New NovaSeq X platform reducing sequencing costs significantly",
                "Growing clinical applications in oncology and reproductive health",
                "Expanding into long-read sequencing technology",
            ],
            &[
                "Increasing competition from Oxford Nanopore and PacBio",
                "Regulatory challenges with Grail acquisition",
                "Potential pricing pressure as sequencing becomes commoditized",
            ],
        ),
        rec(
            Sector::Genomics,
            "PACB",
            "Pacific Biosciences of California, Inc.",
            3.85,
            0.15,
            Rating::Buy,
            5.50,
            42.86,
            "Jennifer Kim",
            "2025-02-22",
            "PacBio is gaining traction with its long-read sequencing technology, which complements short-read approaches for more comprehensive genomic analysis.",
            &[
                "Leader in long-read sequencing technology",
                "New Revio system increases throughput while lowering costs",
                "Growing adoption in research and clinical settings",
                "Strategic partnership with Invitae for clinical applications",
            ],
            &[
                "History of operating losses and cash burn",
                "Competition from Illumina moving into long-read space",
                "Technology adoption slower than short-read sequencing",
            ],
        ),
    ]
}

fn space() -> Vec<Recommendation> {
    vec![
        rec(
            Sector::Space,
            "SPCE",
            "Virgin Galactic Holdings, Inc.",
            1.85,
            -0.15,
            Rating::Hold,
            2.00,
            8.11,
            "James Wilson",
            "2025-02-27",
            "Virgin Galactic is working to scale its suborbital space tourism operations while facing challenges in achieving profitability and regular flight cadence.",
            &[
                "Successfully launched commercial space tourism operations",
                "Building second generation of spacecraft for improved economics",
                "Strong brand recognition in space tourism market",
                "Potential for high-margin revenue from space tourism",
            ],
            &[
                "Significant cash burn with uncertain path to profitability",
                "Safety concerns could impact operations",
                "Competition from Blue Origin in suborbital tourism",
                "Limited addressable market at current pricing",
            ],
        ),
        rec(
            Sector::Space,
            "RKLB",
            "Rocket Lab USA, Inc.",
            5.25,
            0.35,
            Rating::Buy,
            8.00,
            52.38,
            "Thomas Lee",
            "2025-02-25",
            "Rocket Lab is establishing itself as a leader in the small satellite launch market while expanding into spacecraft components and medium-lift rockets.",
            &[
                "Reliable small satellite launch provider with Electron rocket",
                "Expanding into medium-lift market with Neutron rocket",
                "Growing space systems business with high margins",
                "Vertical integration strategy reducing costs",
            ],
            &[
                "Increasing competition in small satellite launch market",
                "Development risks with new Neutron rocket",
                "Potential slowdown in satellite constellation deployments",
                "Still operating at a loss with significant R&D expenses",
            ],
        ),
        rec(
            Sector::Space,
            "MAXR",
            "Maxar Technologies Inc.",
            52.75,
            1.25,
            Rating::Buy,
            65.00,
            23.22,
            "Emily Chen",
            "2025-02-20",
            "Maxar is a leading provider of Earth intelligence and space infrastructure, with strong government relationships and growing commercial opportunities.",
            &[
                "Leading provider of high-resolution satellite imagery",
                "Strong backlog of government contracts",
                "WorldView Legion constellation expanding capacity",
                "Diversified revenue across Earth intelligence and space infrastructure",
            ],
            &[
                "High debt levels from previous acquisitions",
                "Increasing competition in Earth observation market",
                "Execution risks with new satellite deployments",
                "Government budget constraints could impact contracts",
            ],
        ),
    ]
}

fn manufacturing() -> Vec<Recommendation> {
    vec![
        rec(
            Sector::Manufacturing,
            "DDD",
            "3D Systems Corporation",
            5.85,
            0.25,
            Rating::Hold,
            7.00,
            19.66,
            "Robert Johnson",
            "2025-02-28",
            "3D Systems is focusing on healthcare and industrial applications for its 3D printing technology, with a strategic shift toward higher-margin opportunities.",
            &[
                "Strong position in healthcare 3D printing applications",
                "Expanding materials portfolio for industrial applications",
                "Strategic focus on higher-margin verticals",
                "New manufacturing partnerships expanding reach",
            ],
            &[
                "History of inconsistent financial performance",
                "Intense competition in industrial 3D printing",
                "Slower than expected adoption in manufacturing",
                "Potential dilution from equity raises",
            ],
        ),
        rec(
            Sector::Manufacturing,
            "XMTR",
            "Xometry, Inc.",
            22.45,
            -0.75,
            Rating::Buy,
            30.00,
            33.63,
            "Jennifer Smith",
            "2025-02-25",
            "Xometry's AI-powered marketplace for on-demand manufacturing is disrupting traditional supply chains and benefiting from reshoring trends.",
            &[
                "AI-powered marketplace connecting customers with manufacturing partners",
                "Growing supplier network with diverse capabilities",
                "Expanding into new manufacturing processes and materials",
                "Benefiting from supply chain resilience and reshoring trends",
            ],
            &[
                "Path to profitability still uncertain",
                "Cyclical exposure to industrial economy",
                "Competition from other digital manufacturing platforms",
                "Supplier quality control challenges",
            ],
        ),
        rec(
            Sector::Manufacturing,
            "DM",
            "Desktop Metal, Inc.",
            0.85,
            0.05,
            Rating::Hold,
            1.20,
            41.18,
            "Michael Zhang",
            "2025-02-20",
            "Desktop Metal is working to commercialize its mass production 3D printing systems while facing financial challenges and competitive pressures.",
            &[
                "Production System P-50 offers high-speed metal 3D printing",
                "Diverse portfolio of additive manufacturing technologies",
                "Growing materials library expanding applications",
                "Strategic focus on mass production applications",
            ],
            &[
                "Significant cash burn and uncertain path to profitability",
                "Integration challenges from multiple acquisitions",
                "Slower than expected adoption of production systems",
                "Intense competition in additive manufacturing",
            ],
        ),
    ]
}

fn fintech() -> Vec<Recommendation> {
    vec![
        rec(
            Sector::Fintech,
            "SQ",
            "Block, Inc.",
            87.45,
            2.15,
            Rating::Buy,
            110.00,
            25.79,
            "Robert Chen",
            "2025-02-28",
            "Block continues to innovate across its ecosystem with Cash App, Square, and TIDAL, while expanding its cryptocurrency and blockchain initiatives.",
            &[
                "Cash App growing user base and increasing monetization",
                "Square seller ecosystem expanding upmarket",
                "Strategic bitcoin investments providing upside exposure",
                "Strong position in both consumer and merchant fintech",
            ],
            &[
                "Increasing competition in payment processing and digital banking",
                "Regulatory scrutiny of cryptocurrency operations",
                "Economic downturn could impact small business customers",
                "High valuation compared to traditional financial services",
            ],
        ),
        rec(
            Sector::Fintech,
            "PYPL",
            "PayPal Holdings, Inc.",
            75.30,
            -1.25,
            Rating::Buy,
            95.00,
            26.16,
            "Sarah Miller",
            "2025-02-25",
            "PayPal is focusing on improving operating efficiency while expanding its digital wallet capabilities and checkout solutions.",
            &[
                "Large user base with over 400 million active accounts",
                "Improving operating margins through cost optimization",
                "Venmo monetization accelerating",
                "Strong position in online checkout with PayPal and Braintree",
            ],
            &[
                "Increasing competition from Apple Pay and other digital wallets",
                "eBay transition impact on transaction volume",
                "Regulatory challenges in multiple jurisdictions",
                "Potential margin pressure from competitive pricing",
            ],
        ),
        rec(
            Sector::Fintech,
            "SOFI",
            "SoFi Technologies, Inc.",
            9.85,
            0.45,
            Rating::Buy,
            14.00,
            42.13,
            "David Wilson",
            "2025-02-22",
            "SoFi is successfully executing its financial services super-app strategy with growing membership and product adoption across lending and financial services.",
            &[
                "Growing member base with strong cross-selling metrics",
                "Bank charter enabling deposit funding and improved economics",
                "Galileo technology platform providing B2B revenue stream",
                "Diversified revenue beyond student loan refinancing",
            ],
            &[
                "Intense competition in digital banking",
                "Credit quality concerns in economic downturn",
                "Regulatory uncertainty in fintech lending",
                "High marketing costs for customer acquisition",
            ],
        ),
    ]
}

fn internet() -> Vec<Recommendation> {
    vec![
        rec(
            Sector::Internet,
            "AMZN",
            "Amazon.com, Inc.",
            185.75,
            3.25,
            Rating::StrongBuy,
            230.00,
            23.82,
            "Jennifer Lee",
            "2025-02-28",
            "Amazon continues to dominate e-commerce and cloud computing while expanding its advertising business and integrating AI across its ecosystem.",
            &[
                "AWS maintaining leadership in cloud computing with AI services",
                "Advertising business growing rapidly with high margins",
                "Improving e-commerce profitability through operational efficiency",
                "Strong position in multiple high-growth markets",
            ],
            &[
                "Increasing competition in cloud from Microsoft and Google",
                "Regulatory scrutiny and potential antitrust actions",
                "International expansion challenges in key markets",
                "High capital expenditure requirements",
            ],
        ),
        rec(
            Sector::Internet,
            "GOOGL",
            "Alphabet Inc.",
            187.45,
            1.25,
            Rating::Buy,
            225.00,
            20.03,
            "Michael Johnson",
            "2025-02-25",
            "Google is effectively monetizing AI across its product suite while maintaining dominance in search and growing its cloud business.",
            &[
                "Search advertising remains highly profitable with AI enhancements",
                "YouTube growing with subscription and advertising revenue",
                "Google Cloud gaining market share with AI differentiation",
                "Strong balance sheet with over $100B in cash",
            ],
            &[
                "Regulatory challenges globally",
                "Increasing competition in digital advertising",
                "Privacy changes impacting ad targeting capabilities",
                "High investments in moonshot projects with uncertain returns",
            ],
        ),
        rec(
            Sector::Internet,
            "META",
            "Meta Platforms, Inc.",
            485.30,
            7.85,
            Rating::Buy,
            550.00,
            13.33,
            "Thomas Brown",
            "2025-02-22",
            "Meta is successfully navigating privacy challenges while growing its advertising business and making strategic investments in AI and the metaverse.",
            &[
                "Strong engagement across Facebook, Instagram, and WhatsApp",
                "Reels monetization improving with AI-driven recommendations",
                "Operational efficiency initiatives improving margins",
                "Strategic AI investments enhancing advertising effectiveness",
            ],
            &[
                "Regulatory scrutiny and potential antitrust actions",
                "Competition for user attention from TikTok and others",
                "High metaverse investments with uncertain returns",
                "Privacy changes impacting ad targeting capabilities",
            ],
        ),
    ]
}

fn mobility() -> Vec<Recommendation> {
    vec![
        rec(
            Sector::Mobility,
            "TSLA",
            "Tesla, Inc.",
            225.45,
            5.75,
            Rating::Buy,
            275.00,
            21.98,
            "David Chen",
            "2025-02-28",
            "Tesla maintains its leadership in electric vehicles while expanding into energy storage, AI, and robotics with its strong technology platform.",
            &[
                "Industry-leading margins in electric vehicles",
                "FSD technology advancing with neural network improvements",
                "Energy business growing with Megapack demand",
                "Optimus robot showing promising development progress",
            ],
            &[
                "Increasing competition in electric vehicles globally",
                "Production ramp challenges for new products",
                "Regulatory scrutiny of autonomous driving claims",
                "Key person risk with CEO Elon Musk",
            ],
        ),
        rec(
            Sector::Mobility,
            "LCID",
            "Lucid Group, Inc.",
            3.25,
            -0.15,
            Rating::Hold,
            4.00,
            23.08,
            "Sarah Wilson",
            "2025-02-25",
            "Lucid is working to scale production of its luxury electric vehicles while facing challenges in demand generation and cash management.",
            &[
                "Industry-leading EV technology with best-in-class efficiency",
                "Expanding product lineup with Gravity SUV",
                "Strong technology licensing opportunities",
                "Saudi backing providing financial stability",
            ],
            &[
                "Production ramp challenges affecting delivery targets",
                "Cash burn with uncertain path to profitability",
                "Luxury EV market facing increasing competition",
                "Potential dilution from additional capital raises",
            ],
        ),
        rec(
            Sector::Mobility,
            "LAZR",
            "Luminar Technologies, Inc.",
            2.85,
            0.25,
            Rating::Buy,
            5.00,
            75.44,
            "Michael Zhang",
            "2025-02-22",
            "Luminar is securing production wins for its lidar technology with major automakers as advanced driver assistance systems become more widespread.",
            &[
                "Production contracts with multiple major automakers",
                "Industry-leading lidar technology for autonomous vehicles",
                "Vertical integration improving cost structure",
                "Software strategy expanding addressable market",
            ],
            &[
                "Significant cash burn with delayed path to profitability",
                "Technology risk from alternative sensing approaches",
                "Automotive industry production delays affecting revenue",
                "Potential dilution from additional capital raises",
            ],
        ),
    ]
}
