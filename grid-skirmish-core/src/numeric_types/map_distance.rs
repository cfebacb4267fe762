quantity! {
    /// Distance on the board, counted in whole tiles.
    quantity: MapDistance; "map distance";
    dimension: Q<P1, Z0>;
    units {
        @tile: 1.0; "t", "tile", "tiles";
    }
}
