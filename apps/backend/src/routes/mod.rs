use actix_web::web;

pub mod games;
pub mod health;
pub mod users;

/// Register every HTTP route. Middleware is attached by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").configure(health::configure_routes));
    cfg.service(web::scope("/api/users").configure(users::configure_routes));
    cfg.service(web::scope("/api/games").configure(games::configure_game_routes));
    cfg.service(web::scope("/api/rounds").configure(games::configure_round_routes));
}
