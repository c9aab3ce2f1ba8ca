pub mod youtube_trending_repository;

pub use youtube_trending_repository::YouTubeTrendingRepository;
