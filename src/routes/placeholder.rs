use actix_web::{web, HttpResponse, Responder};

const MAX_SIDE: u32 = 2000;

/*
    /api/placeholder/{width}/{height}
*/
pub async fn placeholder(path: web::Path<(u32, u32)>) -> impl Responder {
    let (width, height) = path.into_inner();
    let width = width.clamp(1, MAX_SIDE);
    let height = height.clamp(1, MAX_SIDE);

    let svg = format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}"><rect width="100%" height="100%" fill="#e5e7eb"/></svg>"##,
        w = width,
        h = height
    );

    HttpResponse::Ok()
        .content_type("image/svg+xml")
        .insert_header(("Cache-Control", "public, max-age=86400"))
        .body(svg)
}
