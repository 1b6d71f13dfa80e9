pub mod a001_category;
pub mod a002_news;
pub mod a003_news_type;
