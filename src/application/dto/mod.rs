pub mod articles;
pub mod authors;
pub mod regions;

pub use articles::ArticleDto;
pub use authors::AuthorDto;
pub use regions::RegionDto;
