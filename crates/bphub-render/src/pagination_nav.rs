//! Pagination nav fragment rendering.

use bphub_core::{PageLink, Pagination};

use crate::escape::escape_attr;

/// Render the pagination nav for a resolved page.
///
/// `href_for` builds the link target for a page number (the caller owns the
/// URL shape, including the other filter parameters). The current page is
/// rendered as a non-clickable `span` carrying `aria-current="page"`.
pub fn render_pagination(pagination: &Pagination, href_for: impl Fn(u32) -> String) -> String {
    let mut out = String::from("<nav class=\"pagination\" aria-label=\"Pagination\">");
    for link in pagination.page_links() {
        match link {
            PageLink::Previous(n) => {
                let href = escape_attr(&href_for(n));
                out.push_str(&format!(
                    "<a class=\"pagination-previous\" href=\"{href}\">Previous</a>"
                ));
            }
            PageLink::Number(n) => {
                let href = escape_attr(&href_for(n));
                out.push_str(&format!("<a class=\"pagination-page\" href=\"{href}\">{n}</a>"));
            }
            PageLink::Current(n) => {
                out.push_str(&format!(
                    "<span class=\"pagination-current\" aria-current=\"page\">{n}</span>"
                ));
            }
            PageLink::Gap => {
                out.push_str("<span class=\"pagination-gap\">&hellip;</span>");
            }
            PageLink::Next(n) => {
                let href = escape_attr(&href_for(n));
                out.push_str(&format!(
                    "<a class=\"pagination-next\" href=\"{href}\">Next</a>"
                ));
            }
        }
    }
    out.push_str("</nav>");
    out
}
