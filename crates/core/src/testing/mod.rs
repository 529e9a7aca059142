//! Testing utilities: a mock page fetcher and canned site markup.
//!
//! The fixtures mirror the structural shape of the real site closely
//! enough for the extraction profiles to match: a popular-downloads
//! section on the home page, a `section > div.row` grid on search
//! pages, and a `p.hidden-xs.hidden-sm` format block on movie pages.

mod mock_fetcher;

pub use mock_fetcher::MockFetcher;

/// Canned HTML pages used across unit and integration tests.
pub mod fixtures {
    fn listing_card(movie: &str, rating: Option<&str>) -> String {
        let rating_el = rating
            .map(|r| format!(r#"<h4 class="rating">{}</h4>"#, r))
            .unwrap_or_default();
        format!(
            r#"<div class="browse-movie-wrap col-xs-10 col-sm-5">
                 <a href="https://yts.mx/movies/{movie}" class="browse-movie-link">
                   <figure>
                     <img src="/assets/{movie}.jpg" alt=""/>
                     <figcaption class="hidden-xs">{rating_el}<h4>Horror</h4></figcaption>
                   </figure>
                 </a>
                 <div class="browse-movie-bottom">
                   <a href="https://yts.mx/movies/{movie}" class="browse-movie-title">{movie}</a>
                 </div>
               </div>"#
        )
    }

    /// Home page with two rated movies in the popular-downloads section.
    pub fn home_page() -> String {
        format!(
            r#"<html><body>
                 <div id="popular-downloads">
                   {}{}
                 </div>
               </body></html>"#,
            listing_card("the-nun-2018", Some("5.3 / 10")),
            listing_card("hereditary-2018", Some("7.3 / 10")),
        )
    }

    /// Home page where one promotional entry has no rating element.
    pub fn home_page_with_unrated_entry() -> String {
        format!(
            r#"<html><body>
                 <div id="popular-downloads">
                   {}{}{}
                 </div>
               </body></html>"#,
            listing_card("the-nun-2018", Some("5.3 / 10")),
            listing_card("promo-feature-2018", None),
            listing_card("hereditary-2018", Some("7.3 / 10")),
        )
    }

    /// Search-results page with two movies.
    pub fn search_page() -> String {
        format!(
            r#"<html><body>
                 <section>
                   <div class="row">
                     {}{}
                   </div>
                 </section>
               </body></html>"#,
            listing_card("the-nun-2018", Some("5.3 / 10")),
            listing_card("the-conjuring-2013", Some("7.5 / 10")),
        )
    }

    /// Movie page with a three-entry format block.
    pub fn movie_page() -> String {
        r#"<html><body>
             <div id="movie-info">
               <h1>The Nun (2018)</h1>
               <p class="hidden-xs hidden-sm">Available in:
                 <a href="https://yts.mx/torrent/download/AAA720">720p.WEB</a>
                 <a href="https://yts.mx/torrent/download/BBB1080">1080p.WEB</a>
                 <a href="https://yts.mx/torrent/download/CCCBR">720p.BluRay</a>
               </p>
             </div>
           </body></html>"#
            .to_string()
    }

    /// Movie page whose format block is missing entirely.
    pub fn movie_page_without_formats() -> String {
        r#"<html><body>
             <div id="movie-info">
               <h1>The Nun (2018)</h1>
               <p>Coming soon</p>
             </div>
           </body></html>"#
            .to_string()
    }
}
