use std::convert::Infallible;
use std::path::Path;

use warp::{Filter, http, Rejection, Reply};
use warp::http::StatusCode;

const INDEX_FILE: &str = "index.html";

/// Static files from `static_dir`; any other `GET` gets `index.html`.
pub fn static_routes(static_dir: &Path) -> impl Filter<Extract=(impl Reply, ), Error=Infallible> + Clone {
    let files = warp::fs::dir(static_dir.to_path_buf());
    let index = warp::fs::file(static_dir.join(INDEX_FILE));

    warp::get()
        .and(files.or(index))
        .recover(handle_rejection)
}

#[tracing::instrument]
async fn handle_rejection(_err: Rejection) -> Result<impl Reply, Infallible> {
    Ok(http::Response::builder()
        .status(StatusCode::NOT_FOUND)
        .body("not found"))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn site() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(INDEX_FILE), "<html>app</html>").unwrap();
        fs::write(dir.path().join("frontend.js"), "run()").unwrap();
        dir
    }

    #[tokio::test]
    async fn serves_existing_files() {
        let dir = site();
        let res = warp::test::request().path("/frontend.js").reply(&static_routes(dir.path())).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.body(), "run()");
    }

    #[tokio::test]
    async fn unknown_paths_fall_back_to_index() {
        let dir = site();
        let res = warp::test::request().path("/logs/all").reply(&static_routes(dir.path())).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.body(), "<html>app</html>");
    }

    #[tokio::test]
    async fn other_methods_are_not_found() {
        let dir = site();
        let res = warp::test::request().method("POST").path("/").reply(&static_routes(dir.path())).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(res.body(), "not found");
    }
}
