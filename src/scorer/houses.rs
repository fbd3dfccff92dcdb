use crate::chart::{Element, House, Person};
use crate::scorer::types::HouseOverlay;

/// How strongly a chart point lights up a house it falls into.
pub fn placement_multiplier(element: Element) -> f64 {
    match element {
        Element::Mars => 5.0,
        Element::Mercury => 4.0,
        _ => 1.0,
    }
}

pub fn overlay_stat(house: &House, element: Element) -> f64 {
    house.weight() * placement_multiplier(element)
}

/// Overlays of `placement_owner`'s five core placements onto
/// `house_owner`'s required houses. A house matches when its element equals
/// the placement's element. Optional placements never overlay, whatever
/// placement set the aspects use.
pub fn find_overlays(house_owner: &Person, placement_owner: &Person) -> Vec<HouseOverlay> {
    let placements = placement_owner.core_placements();
    let mut overlays = Vec::new();

    for house in house_owner.houses() {
        for (element, placement) in &placements {
            if house.element() != placement.sign {
                continue;
            }
            overlays.push(HouseOverlay {
                house_owner: house_owner.name.clone(),
                placement_owner: placement_owner.name.clone(),
                house,
                element: *element,
                placement: *placement,
                stat: overlay_stat(&house, *element),
            });
        }
    }

    overlays
}

/// Both directions, first's houses before second's.
pub fn process_houses(first: &Person, second: &Person) -> Vec<HouseOverlay> {
    let mut overlays = find_overlays(first, second);
    overlays.extend(find_overlays(second, first));
    overlays
}
