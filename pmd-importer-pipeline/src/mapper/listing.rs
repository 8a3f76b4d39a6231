use pmd_importer_shared::types::{LegacyListing, PlaceDetail, Post};

use crate::mapper::{
    map_status, ListingFieldSet, MapperContext, DEFAULT_MAPVIEW, DEFAULT_MAPZOOM,
    FACEBOOK_BASE_URL, PLACE_POST_TYPE, TWITTER_BASE_URL,
};

/// Maps a legacy listing to its post row and its place detail row.
///
/// # Arguments
///
/// * `listing` - The legacy listing to map.
/// * `context` - Site URL for the guid and the listing field set to produce.
///
/// # Returns
///
/// The `Post` and `PlaceDetail` for the listing, both keyed by the legacy id.
pub fn map_listing(listing: &LegacyListing, context: &MapperContext) -> (Post, PlaceDetail) {
    let status = map_status(&listing.status);
    let wizard = context.field_set == ListingFieldSet::Wizard;

    let post = Post {
        id: listing.id,
        author: listing.user_id,
        title: listing.title.clone(),
        slug: listing.friendly_url.clone(),
        excerpt: listing.description_short.clone(),
        content: listing.description.clone(),
        created_at: listing.date,
        updated_at: listing.date_update.or(listing.date),
        status: status.clone(),
        parent_id: 0,
        guid: context.place_guid(&listing.friendly_url),
        post_type: PLACE_POST_TYPE.to_string(),
        comment_status: "open".to_string(),
        ping_status: "closed".to_string(),
        comment_count: 0,
        menu_order: 0,
    };

    let detail = PlaceDetail {
        post_id: listing.id,
        post_title: listing.title.clone(),
        post_status: status,
        post_category: category_list(listing.primary_category_id),
        default_category: listing.primary_category_id,
        featured: listing.featured,
        claimed: listing.claimed,
        expire_date: listing.pagerank_expiration.map(|expiry| expiry.date()),
        submit_ip: listing.ip.clone(),
        overall_rating: listing.rating,
        rating_count: 0,
        street: listing.listing_address1.clone(),
        street2: listing.listing_address2.clone(),
        city: listing.location_text_1.clone(),
        region: listing.location_text_2.clone(),
        zip: listing.listing_zip.clone(),
        latitude: listing.latitude.clone(),
        longitude: listing.longitude.clone(),
        phone: listing.phone.clone(),
        twitter: social_link(TWITTER_BASE_URL, &listing.twitter_id, wizard),
        facebook: social_link(FACEBOOK_BASE_URL, &listing.facebook_page_id, wizard),
        business_hours: listing.hours.clone(),
        email: wizard.then(|| listing.mail.clone()),
        website: wizard.then(|| listing.www.clone()),
        mapview: wizard.then(|| DEFAULT_MAPVIEW.to_string()),
        mapzoom: wizard.then(|| DEFAULT_MAPZOOM.to_string()),
    };

    (post, detail)
}

/// GeoDirectory stores category ids comma-wrapped: `,5,`.
fn category_list(category_id: u64) -> String {
    if category_id == 0 {
        String::new()
    } else {
        format!(",{category_id},")
    }
}

/// An empty handle stays empty; handles that are already URLs are kept.
fn social_link(base_url: &str, handle: &str, prefix: bool) -> String {
    let handle = handle.trim();
    if !prefix || handle.is_empty() || handle.starts_with("http://") || handle.starts_with("https://")
    {
        return handle.to_string();
    }
    format!("{base_url}{handle}")
}
