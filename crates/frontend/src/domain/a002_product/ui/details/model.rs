/// Rating icons rendered on the detail page; a product rating above this
/// caps at a full row.
pub const RATING_ICONS: u32 = 4;

/// Outbound purchase link: opens a WhatsApp chat with the shop's number,
/// pre-filled with the product page URL. Prefix and phone are fixed; only
/// the page URL varies.
pub fn whatsapp_url(page_url: &str) -> String {
    format!(
        "https://api.whatsapp.com/send/?phone=+34%20613%2082%2068%2058&text=Je%20suis%20int%C3%A9ress%C3%A9%20par%20ce%20produit%20{}",
        urlencoding::encode(page_url)
    )
}

/// How many of the rating icons render filled.
pub fn filled_stars(rating: Option<u32>) -> u32 {
    rating.unwrap_or(0).min(RATING_ICONS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_url_is_encoded_into_the_message() {
        let url = whatsapp_url("https://shop.test/product/p1");
        assert!(url.ends_with("produit%20https%3A%2F%2Fshop.test%2Fproduct%2Fp1"));
        assert!(url.starts_with("https://api.whatsapp.com/send/?phone="));
    }

    #[test]
    fn ratings_cap_at_the_icon_count() {
        assert_eq!(filled_stars(None), 0);
        assert_eq!(filled_stars(Some(2)), 2);
        assert_eq!(filled_stars(Some(9)), 4);
    }
}
