/// Console adapter: rendering and the request spinner.
pub mod renderer;
