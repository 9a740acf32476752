mod helpers;
mod test_engagement_routes;
mod test_trending_routes;
