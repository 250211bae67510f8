mod create;
mod load;
mod submit;
