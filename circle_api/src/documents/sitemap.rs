//! `/sitemap.xml`: the site has a single canonical page.

use chrono::NaiveDate;

/// Render the sitemap with `lastmod` set to `today`.
pub fn sitemap_xml(site_url: &str, today: NaiveDate) -> String {
    format!(
        concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
            "<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
            "  <url>\n",
            "    <loc>{}</loc>\n",
            "    <lastmod>{}</lastmod>\n",
            "    <changefreq>monthly</changefreq>\n",
            "    <priority>1.0</priority>\n",
            "  </url>\n",
            "</urlset>\n",
        ),
        site_url,
        today.format("%Y-%m-%d"),
    )
}
