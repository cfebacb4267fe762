quantity! {
    /// Health, damage and damage reduction.
    quantity: HitPoints; "hit points";
    dimension: Q<Z0, P1>;
    units {
        @point: 1.0; "hp", "point", "points";
    }
}
