//! Built-in HTML dashboard template with `{{PLACEHOLDER}}` substitution.

pub fn template() -> &'static str {
    r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{{TICKER}} dashboard</title>
<style>
  body { font-family: sans-serif; margin: 2rem auto; max-width: 780px; color: #222; }
  h1 { margin-bottom: 0.2rem; }
  .meta { color: #666; margin-bottom: 1.5rem; }
  .score-card { border: 1px solid #ddd; border-radius: 6px; padding: 1rem; margin-bottom: 1.5rem; }
  .score-card .value { font-size: 2rem; font-weight: bold; }
  .grade { display: inline-block; padding: 0.1rem 0.6rem; border-radius: 4px; background: #eee; font-weight: bold; }
  section { margin-bottom: 1.5rem; }
  table { border-collapse: collapse; width: 100%; }
  th, td { border: 1px solid #ddd; padding: 0.3rem 0.5rem; text-align: left; font-size: 0.9rem; }
  th { background: #f6f6f6; }
  ul { padding-left: 1.2rem; }
  .muted { color: #888; }
</style>
</head>
<body>
<h1>{{TICKER}}</h1>
<p class="meta">{{CHART_LABEL}} chart &middot; generated {{GENERATED_AT}}</p>

<div class="score-card">
  <span class="value">{{SCORE}}</span> / 100
  <span class="grade">{{GRADE}}</span>
  <ul>
{{REASONS}}
  </ul>
</div>

<section>
<h2>Price</h2>
{{PRICE_CHART}}
</section>

{{VOLUME_SECTION}}
{{MACD_SECTION}}
{{RSI_SECTION}}

<section>
<h2>Company</h2>
<table>
{{INFO_TABLE}}
</table>
</section>

<section>
<h2>Recent bars</h2>
<table>
<tr><th>Date</th><th>Open</th><th>High</th><th>Low</th><th>Close</th><th>Volume</th><th>RSI</th></tr>
{{BARS_TABLE}}
</table>
</section>

<section>
<h2>News</h2>
<ul>
{{NEWS_LIST}}
</ul>
</section>

</body>
</html>
"#
}
