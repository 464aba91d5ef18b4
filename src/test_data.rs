#[cfg(test)]
use crate::view::post_renderer::SiteSettings;

#[cfg(test)]
pub fn sample_site() -> SiteSettings {
    SiteSettings {
        name: "Test Hub".to_string(),
        affiliate_url: "https://example.com/?ref=1".to_string(),
        hero_image: "hero.png".to_string(),
        copyright_year: 2025,
    }
}

/// A post as the generator writes it, trimmed down
#[cfg(test)]
pub const GENERATED_POST: &str = r##"<!DOCTYPE html>
<html lang="en">
  <head>
    <title>Writesonic vs Jasper – Which AI Writer Wins?</title>
    <meta name="description" content="Compare Writesonic and Jasper." />
  </head>
  <body>
    <section class="container hero">
      <div class="hero-image">
        <img src="/images/article-default.png" alt="Hero image" />
      </div>
    </section>
    <section class="container">
      <h2>Jasper Overview</h2>
      <p>Jasper writes.</p>
      <img src="/images/inline-chart.png" alt="Chart" />
    </section>
    <footer class="footer"><div class="container"><p>© 2025 AI Writer Hub.</p></div></footer>
  </body>
</html>"##;

/// Hand-written page with none of the markers the patcher anchors on
#[cfg(test)]
pub const BARE_POST: &str = r##"<html>
<body>
<h1>Hand written</h1>
<p>No title, no meta, no footer.</p>
</body>
</html>"##;
