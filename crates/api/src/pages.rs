//! HTML Page Rendering
//!
//! Small formatting functions instead of a template engine; there are only
//! three pages. All user-supplied strings are escaped before interpolation.

use predictor::VehicleQuery;

/// Escape a string for interpolation into HTML text or attribute values.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// The search form page
pub fn search_page() -> String {
    r#"<!DOCTYPE html>
<html>
<head><title>Vehicle Price Search</title></head>
<body>
<h1>Vehicle Price Search</h1>
<form action="/results" method="post">
  <label>Year <input type="number" name="year" required></label>
  <label>Make <input type="text" name="make" required></label>
  <label>Model <input type="text" name="model" required></label>
  <button type="submit">Estimate Price</button>
</form>
</body>
</html>
"#
    .to_string()
}

/// The results page, echoing the query and the predicted price
pub fn results_page(query: &VehicleQuery, price: u64) -> String {
    let year = escape_html(&query.year);
    let make = escape_html(&query.make);
    let model = escape_html(&query.model);

    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Estimated Price</title></head>
<body>
<h1>Estimated Price</h1>
<p>{year} {make} {model}</p>
<p class="price">${price}</p>
<p><a href="/">Search again</a></p>
</body>
</html>
"#
    )
}

/// Generic failure page; deliberately carries no detail about the error
pub fn error_page() -> String {
    r#"<!DOCTYPE html>
<html>
<head><title>Something Went Wrong</title></head>
<body>
<h1>Something went wrong</h1>
<p>We could not estimate a price for that vehicle.</p>
<p><a href="/">Back to search</a></p>
</body>
</html>
"#
    .to_string()
}
