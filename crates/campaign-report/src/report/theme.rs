/// Plotly.js bundle loaded by every generated page.
pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Stylesheet embedded in every generated page.
pub const STYLESHEET: &str = r#"
body { margin: 0; font-family: 'Helvetica', 'PingFang TC', 'Noto Sans TC', sans-serif; color: #0f172a; background-color: #ffffff; }
.page { display: flex; min-height: 100vh; }
.content { flex: 1; max-width: 1200px; margin: 0 auto; padding: 30px 40px; }
h1 { color: #1e3a8a; font-family: 'Helvetica', sans-serif; margin-bottom: 0px; }
h2 { color: #1e3a8a; border-left: 5px solid #3b82f6; padding-left: 15px; margin-top: 60px; margin-bottom: 30px; }
h3 { color: #334155; margin-top: 20px; }
.caption { color: #64748b; font-size: 14px; }

.sidebar { width: 260px; flex-shrink: 0; background-color: #f0f2f6; padding: 30px 20px; box-sizing: border-box; }
.sidebar ol { padding-left: 20px; }
.sidebar a { color: #1e3a8a; text-decoration: none; }
.nav-radio { display: block; padding: 6px 0; }
.nav-radio.active { font-weight: bold; }

.tab-bar { display: flex; gap: 4px; border-bottom: 2px solid #e2e8f0; margin: 20px 0; flex-wrap: wrap; }
.tab-bar a { padding: 10px 16px; color: #64748b; text-decoration: none; border-bottom: 3px solid transparent; }
.tab-bar a.active { color: #ef4444; border-bottom-color: #ef4444; }

.columns { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 24px; }
.metric-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 16px; }

/* 指標卡片 */
.metric-container {
    background-color: #f8fafc;
    border: 1px solid #e2e8f0;
    padding: 20px;
    border-radius: 12px;
    box-shadow: 0 2px 5px rgba(0,0,0,0.05);
    transition: all 0.3s ease;
}
.metric-container:hover {
    box-shadow: 0 5px 15px rgba(0,0,0,0.1);
    transform: translateY(-2px);
}
.metric-label { color: #475569; font-size: 14px; }
.metric-value { font-size: 32px; font-weight: 600; }
.metric-delta { color: #16a34a; font-size: 14px; }

/* 策略卡片 */
.card-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 24px; }
.post-card {
    background-color: white;
    padding: 25px;
    border-radius: 16px;
    border: 1px solid #e5e7eb;
    box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
    height: 100%;
    box-sizing: border-box;
}
.post-card h3, .card-subtitle { text-align: center; }
.card-subtitle { color: #64748b; }

/* 章節容器 */
.section-container { padding: 20px 0; }
.section-card {
    background-color: #ffffff;
    border: 1px solid #e2e8f0;
    border-radius: 16px;
    padding: 10px 30px 30px 30px;
    margin-bottom: 30px;
    box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.08);
}
.section-card h2 { margin-top: 20px; }

.report-image { margin: 0 0 16px 0; }
.report-image img { width: 100%; border-radius: 8px; }
.report-image figcaption { color: #64748b; font-size: 14px; text-align: center; margin-top: 6px; }

.alert { padding: 16px; border-radius: 8px; margin: 12px 0; }
.alert-info { background-color: #e0f2fe; color: #075985; }
.alert-success { background-color: #dcfce7; color: #166534; }
.alert-warning { background-color: #fef9c3; color: #854d0e; }

details.content-tab { border: 1px solid #e2e8f0; border-radius: 8px; padding: 10px 14px; margin-bottom: 10px; }
details.content-tab summary { cursor: pointer; font-weight: 600; }

.conclusion {
    background-color: #eff6ff;
    padding: 30px;
    border-radius: 15px;
    border-left: 10px solid #1e3a8a;
}
.conclusion h3 { color: #1e3a8a; margin-top: 0; }
.conclusion .lead { font-size: 18px; }
"#;
