/// Use cases module containing application business logic orchestration
mod generate_views;

pub use generate_views::GenerateViewsUseCase;
