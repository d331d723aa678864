//! Narrative content of the campaign review.
//!
//! Each section is a list of [`Block`]s. Images are referenced by logical
//! asset key and resolved at render time. Text may mark emphasis with
//! `**double asterisks**`.
use crate::assets;
use crate::navigation::Section;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMetric {
    pub label: &'static str,
    pub value: &'static str,
    pub delta: &'static str,
    pub caption: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub accent: &'static str,
    pub summary: &'static str,
    pub tactics: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConclusionPoint {
    pub term: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Text(&'static str),
    Heading {
        level: u8,
        text: &'static str,
    },
    Callout {
        tone: Tone,
        text: &'static str,
    },
    Caption(&'static str),
    Image {
        key: &'static str,
        caption: &'static str,
    },
    Metrics {
        headline: &'static str,
        intro: &'static str,
        metrics: Vec<KeyMetric>,
    },
    TrendChart,
    Cards(Vec<StrategyCard>),
    Columns(Vec<Vec<Block>>),
    Tabs(Vec<(&'static str, Vec<Block>)>),
    Conclusion {
        title: &'static str,
        lead: &'static str,
        points: Vec<ConclusionPoint>,
    },
}

impl Block {
    /// Asset keys referenced by this block and its children, in reading order.
    pub fn image_keys(&self) -> Vec<&'static str> {
        match self {
            Block::Image { key, .. } => vec![*key],
            Block::Columns(columns) => columns.iter().flatten().flat_map(Block::image_keys).collect(),
            Block::Tabs(tabs) => tabs
                .iter()
                .flat_map(|(_, blocks)| blocks.iter().flat_map(Block::image_keys))
                .collect(),
            _ => Vec::new(),
        }
    }
}

pub fn key_metrics() -> Vec<KeyMetric> {
    vec![
        KeyMetric {
            label: "市場聲量",
            value: "NO.1",
            delta: "超越競品",
            caption: "品牌產品字搜尋量制霸",
        },
        KeyMetric {
            label: "銷售排名",
            value: "TOP 3",
            delta: "常態熱銷",
            caption: "全公司原價鞋款",
        },
        KeyMetric {
            label: "團購銷量",
            value: "400+",
            delta: "雙/月",
            caption: "七月單月爆發",
        },
        KeyMetric {
            label: "網路聲量",
            value: "2X",
            delta: "100%",
            caption: "帶動品牌整體成長",
        },
    ]
}

pub fn strategy_cards() -> Vec<StrategyCard> {
    vec![
        StrategyCard {
            icon: "🛡️",
            title: "建立信任",
            subtitle: "Build Trust",
            accent: "#3b82f6",
            summary: "透過權威媒體、KOL與真實用戶口碑，奠定產品「好看又好穿」的市場共識。",
            tactics: vec!["雜誌廣編", "KOL 內容", "會員試穿心得"],
        },
        StrategyCard {
            icon: "🔥",
            title: "創造需求",
            subtitle: "Create Demand",
            accent: "#ef4444",
            summary: "運用多元素材與社群議題操作，點燃潛在消費者的好奇心與購買慾。",
            tactics: vec!["Meta 廣告", "Dcard 議題", "穿搭內容"],
        },
        StrategyCard {
            icon: "💰",
            title: "驅動轉換",
            subtitle: "Drive Conversion",
            accent: "#10b981",
            summary: "在高意圖渠道精準攔截，並以限時促銷加速決策，實現銷售收割。",
            tactics: vec!["Google 關鍵字", "團購合作", "促銷活動"],
        },
    ]
}

pub fn conclusion_points() -> Vec<ConclusionPoint> {
    vec![
        ConclusionPoint {
            term: "聲量先行：",
            text: "在投入大量轉換廣告前，先集中資源創造口碑。",
        },
        ConclusionPoint {
            term: "情境觸發：",
            text: "敏銳抓住時事（長榮空姐），將專業需求轉嫁到大眾市場。",
        },
        ConclusionPoint {
            term: "信任疊加：",
            text: "結合「媒體」、「KOL」、「素人」三方背書。",
        },
        ConclusionPoint {
            term: "全通路整合：",
            text: "線上廣告與線下門市緊密配合，O2O 導流順暢。",
        },
    ]
}

/// Content blocks for one section.
pub fn section_blocks(section: Section) -> Vec<Block> {
    match section {
        Section::KeyWins => vec![Block::Columns(vec![
            vec![Block::Image {
                key: assets::PRODUCT_HERO,
                caption: "DK 呼吸空氣小白鞋",
            }],
            vec![Block::Metrics {
                headline: "我們達成了四個關鍵勝利",
                intro: "在此次行銷戰役中，我們不僅成功推廣了新品，更在各項指標上取得了顯著的突破。",
                metrics: key_metrics(),
            }],
        ])],
        Section::Trend => vec![
            Block::Text("推出僅兩個月，Google 搜尋量即追平對手，半年內實現反超並拉開差距。"),
            Block::TrendChart,
        ],
        Section::Strategy => vec![
            Block::Text("我們的成功並非偶然，而是來自一個環環相扣的策略飛輪："),
            Block::Cards(strategy_cards()),
        ],
        Section::Trust => vec![
            Block::Text("在正式開跑前，先用真實口碑建立信任護城河。"),
            Block::Columns(vec![
                vec![
                    Block::Heading {
                        level: 3,
                        text: "👥 會員試穿活動 (UGC)",
                    },
                    Block::Callout {
                        tone: Tone::Info,
                        text: "策略：透過「送購物金」與「實體贈品」，邀請會員到店試穿並分享真實心得。",
                    },
                    Block::Image {
                        key: assets::UGC_CAMPAIGN,
                        caption: "FB 募集活動貼文",
                    },
                ],
                vec![
                    Block::Heading {
                        level: 3,
                        text: "🗣️ 社群議題操作 (Dcard)",
                    },
                    Block::Callout {
                        tone: Tone::Info,
                        text: "策略：在年輕族群中「種下問題」，引發自然討論與 SEO 佈局。",
                    },
                    Block::Image {
                        key: assets::DCARD_THREAD,
                        caption: "Dcard 討論串",
                    },
                ],
            ]),
        ],
        Section::Authority => vec![
            Block::Text("結合時尚權威與真實體驗，解決「機能鞋不好看」的痛點。"),
            Block::Columns(vec![
                vec![
                    Block::Heading {
                        level: 4,
                        text: "👠 時尚權威認證",
                    },
                    Block::Image {
                        key: assets::MAGAZINE_FEATURE,
                        caption: "美麗佳人廣編稿",
                    },
                    Block::Caption("策略意圖：藉由時尚媒體廣編，將「機能鞋」提升至「時尚單品」的層次。"),
                ],
                vec![
                    Block::Heading {
                        level: 4,
                        text: "✈️ KOL 真實推薦 (阿淇博士 & Abby)",
                    },
                    Block::Tabs(vec![
                        (
                            "空姐 Abby",
                            vec![
                                Block::Image {
                                    key: assets::KOL_ABBY,
                                    caption: "KOL Abby 推薦",
                                },
                                Block::Caption("抓住長榮航空換鞋潮，強調久站舒適與職場穿搭。"),
                            ],
                        ),
                        (
                            "阿淇博士",
                            vec![
                                Block::Image {
                                    key: assets::KOL_DR_CHI,
                                    caption: "阿淇博士推薦",
                                },
                                Block::Caption("以「好穿到像走在雲上」為訴求，強化舒適度認知。"),
                            ],
                        ),
                    ]),
                ],
            ]),
        ],
        Section::Conversion => vec![
            Block::Text("精準投放，分層收割。"),
            Block::Heading {
                level: 3,
                text: "🎯 Meta 廣告分層策略",
            },
            Block::Text("針對不同階段消費者，投遞「節慶折扣」、「庫存告急」、「新客優惠」等不同訊息。"),
            Block::Image {
                key: assets::META_ADS,
                caption: "Meta 廣告素材總覽",
            },
            Block::Columns(vec![
                vec![
                    Block::Heading {
                        level: 4,
                        text: "🔍 Google 關鍵字攔截",
                    },
                    Block::Image {
                        key: assets::GOOGLE_ADS,
                        caption: "Google Ads 截圖",
                    },
                ],
                vec![
                    Block::Heading {
                        level: 4,
                        text: "📦 KOL 團購收割",
                    },
                    Block::Callout {
                        tone: Tone::Success,
                        text: "在累積了足夠聲量後，進行團購轉化，單次合作創造 **232雙+** 的銷量。",
                    },
                    Block::Image {
                        key: assets::GROUP_BUY,
                        caption: "團購貼文",
                    },
                ],
            ]),
        ],
        Section::Conclusion => vec![Block::Conclusion {
            title: "🎯 DK 小白鞋勝利方程式",
            lead: "這不僅是一款產品的勝利，更是市場溝通策略的升級。",
            points: conclusion_points(),
        }],
    }
}

/// Every asset key the report references, in reading order.
pub fn referenced_image_keys() -> Vec<&'static str> {
    Section::ALL
        .iter()
        .flat_map(|section| section_blocks(*section))
        .flat_map(|block| block.image_keys())
        .collect()
}
