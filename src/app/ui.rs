mod canvas;
mod icons;
mod side;
mod status;
mod top;
