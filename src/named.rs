//! The CSS3 extended color keyword table.
//! <https://www.w3.org/TR/css3-color/#svg-color>

use crate::Color;
use phf::phf_map;

/// All 148 CSS3 extended color keywords (147 named colors plus
/// `transparent`), keyed by their lowercase names. Built at compile time,
/// never mutated.
pub(crate) static NAMED_COLORS: phf::Map<&'static str, Color> = phf_map! {
    "transparent" => Color::new(0, 0, 0, 0),
    "aliceblue" => Color::new(240, 248, 255, 255),
    "antiquewhite" => Color::new(250, 235, 215, 255),
    "aqua" => Color::new(0, 255, 255, 255),
    "aquamarine" => Color::new(127, 255, 212, 255),
    "azure" => Color::new(240, 255, 255, 255),
    "beige" => Color::new(245, 245, 220, 255),
    "bisque" => Color::new(255, 228, 196, 255),
    "black" => Color::new(0, 0, 0, 255),
    "blanchedalmond" => Color::new(255, 235, 205, 255),
    "blue" => Color::new(0, 0, 255, 255),
    "blueviolet" => Color::new(138, 43, 226, 255),
    "brown" => Color::new(165, 42, 42, 255),
    "burlywood" => Color::new(222, 184, 135, 255),
    "cadetblue" => Color::new(95, 158, 160, 255),
    "chartreuse" => Color::new(127, 255, 0, 255),
    "chocolate" => Color::new(210, 105, 30, 255),
    "coral" => Color::new(255, 127, 80, 255),
    "cornflowerblue" => Color::new(100, 149, 237, 255),
    "cornsilk" => Color::new(255, 248, 220, 255),
    "crimson" => Color::new(220, 20, 60, 255),
    "cyan" => Color::new(0, 255, 255, 255),
    "darkblue" => Color::new(0, 0, 139, 255),
    "darkcyan" => Color::new(0, 139, 139, 255),
    "darkgoldenrod" => Color::new(184, 134, 11, 255),
    "darkgray" => Color::new(169, 169, 169, 255),
    "darkgreen" => Color::new(0, 100, 0, 255),
    "darkgrey" => Color::new(169, 169, 169, 255),
    "darkkhaki" => Color::new(189, 183, 107, 255),
    "darkmagenta" => Color::new(139, 0, 139, 255),
    "darkolivegreen" => Color::new(85, 107, 47, 255),
    "darkorange" => Color::new(255, 140, 0, 255),
    "darkorchid" => Color::new(153, 50, 204, 255),
    "darkred" => Color::new(139, 0, 0, 255),
    "darksalmon" => Color::new(233, 150, 122, 255),
    "darkseagreen" => Color::new(143, 188, 143, 255),
    "darkslateblue" => Color::new(72, 61, 139, 255),
    "darkslategray" => Color::new(47, 79, 79, 255),
    "darkslategrey" => Color::new(47, 79, 79, 255),
    "darkturquoise" => Color::new(0, 206, 209, 255),
    "darkviolet" => Color::new(148, 0, 211, 255),
    "deeppink" => Color::new(255, 20, 147, 255),
    "deepskyblue" => Color::new(0, 191, 255, 255),
    "dimgray" => Color::new(105, 105, 105, 255),
    "dimgrey" => Color::new(105, 105, 105, 255),
    "dodgerblue" => Color::new(30, 144, 255, 255),
    "firebrick" => Color::new(178, 34, 34, 255),
    "floralwhite" => Color::new(255, 250, 240, 255),
    "forestgreen" => Color::new(34, 139, 34, 255),
    "fuchsia" => Color::new(255, 0, 255, 255),
    "gainsboro" => Color::new(220, 220, 220, 255),
    "ghostwhite" => Color::new(248, 248, 255, 255),
    "gold" => Color::new(255, 215, 0, 255),
    "goldenrod" => Color::new(218, 165, 32, 255),
    "gray" => Color::new(128, 128, 128, 255),
    "green" => Color::new(0, 128, 0, 255),
    "greenyellow" => Color::new(173, 255, 47, 255),
    "grey" => Color::new(128, 128, 128, 255),
    "honeydew" => Color::new(240, 255, 240, 255),
    "hotpink" => Color::new(255, 105, 180, 255),
    "indianred" => Color::new(205, 92, 92, 255),
    "indigo" => Color::new(75, 0, 130, 255),
    "ivory" => Color::new(255, 255, 240, 255),
    "khaki" => Color::new(240, 230, 140, 255),
    "lavender" => Color::new(230, 230, 250, 255),
    "lavenderblush" => Color::new(255, 240, 245, 255),
    "lawngreen" => Color::new(124, 252, 0, 255),
    "lemonchiffon" => Color::new(255, 250, 205, 255),
    "lightblue" => Color::new(173, 216, 230, 255),
    "lightcoral" => Color::new(240, 128, 128, 255),
    "lightcyan" => Color::new(224, 255, 255, 255),
    "lightgoldenrodyellow" => Color::new(250, 250, 210, 255),
    "lightgray" => Color::new(211, 211, 211, 255),
    "lightgreen" => Color::new(144, 238, 144, 255),
    "lightgrey" => Color::new(211, 211, 211, 255),
    "lightpink" => Color::new(255, 182, 193, 255),
    "lightsalmon" => Color::new(255, 160, 122, 255),
    "lightseagreen" => Color::new(32, 178, 170, 255),
    "lightskyblue" => Color::new(135, 206, 250, 255),
    "lightslategray" => Color::new(119, 136, 153, 255),
    "lightslategrey" => Color::new(119, 136, 153, 255),
    "lightsteelblue" => Color::new(176, 196, 222, 255),
    "lightyellow" => Color::new(255, 255, 224, 255),
    "lime" => Color::new(0, 255, 0, 255),
    "limegreen" => Color::new(50, 205, 50, 255),
    "linen" => Color::new(250, 240, 230, 255),
    "magenta" => Color::new(255, 0, 255, 255),
    "maroon" => Color::new(128, 0, 0, 255),
    "mediumaquamarine" => Color::new(102, 205, 170, 255),
    "mediumblue" => Color::new(0, 0, 205, 255),
    "mediumorchid" => Color::new(186, 85, 211, 255),
    "mediumpurple" => Color::new(147, 112, 219, 255),
    "mediumseagreen" => Color::new(60, 179, 113, 255),
    "mediumslateblue" => Color::new(123, 104, 238, 255),
    "mediumspringgreen" => Color::new(0, 250, 154, 255),
    "mediumturquoise" => Color::new(72, 209, 204, 255),
    "mediumvioletred" => Color::new(199, 21, 133, 255),
    "midnightblue" => Color::new(25, 25, 112, 255),
    "mintcream" => Color::new(245, 255, 250, 255),
    "mistyrose" => Color::new(255, 228, 225, 255),
    "moccasin" => Color::new(255, 228, 181, 255),
    "navajowhite" => Color::new(255, 222, 173, 255),
    "navy" => Color::new(0, 0, 128, 255),
    "oldlace" => Color::new(253, 245, 230, 255),
    "olive" => Color::new(128, 128, 0, 255),
    "olivedrab" => Color::new(107, 142, 35, 255),
    "orange" => Color::new(255, 165, 0, 255),
    "orangered" => Color::new(255, 69, 0, 255),
    "orchid" => Color::new(218, 112, 214, 255),
    "palegoldenrod" => Color::new(238, 232, 170, 255),
    "palegreen" => Color::new(152, 251, 152, 255),
    "paleturquoise" => Color::new(175, 238, 238, 255),
    "palevioletred" => Color::new(219, 112, 147, 255),
    "papayawhip" => Color::new(255, 239, 213, 255),
    "peachpuff" => Color::new(255, 218, 185, 255),
    "peru" => Color::new(205, 133, 63, 255),
    "pink" => Color::new(255, 192, 203, 255),
    "plum" => Color::new(221, 160, 221, 255),
    "powderblue" => Color::new(176, 224, 230, 255),
    "purple" => Color::new(128, 0, 128, 255),
    "red" => Color::new(255, 0, 0, 255),
    "rosybrown" => Color::new(188, 143, 143, 255),
    "royalblue" => Color::new(65, 105, 225, 255),
    "saddlebrown" => Color::new(139, 69, 19, 255),
    "salmon" => Color::new(250, 128, 114, 255),
    "sandybrown" => Color::new(244, 164, 96, 255),
    "seagreen" => Color::new(46, 139, 87, 255),
    "seashell" => Color::new(255, 245, 238, 255),
    "sienna" => Color::new(160, 82, 45, 255),
    "silver" => Color::new(192, 192, 192, 255),
    "skyblue" => Color::new(135, 206, 235, 255),
    "slateblue" => Color::new(106, 90, 205, 255),
    "slategray" => Color::new(112, 128, 144, 255),
    "slategrey" => Color::new(112, 128, 144, 255),
    "snow" => Color::new(255, 250, 250, 255),
    "springgreen" => Color::new(0, 255, 127, 255),
    "steelblue" => Color::new(70, 130, 180, 255),
    "tan" => Color::new(210, 180, 140, 255),
    "teal" => Color::new(0, 128, 128, 255),
    "thistle" => Color::new(216, 191, 216, 255),
    "tomato" => Color::new(255, 99, 71, 255),
    "turquoise" => Color::new(64, 224, 208, 255),
    "violet" => Color::new(238, 130, 238, 255),
    "wheat" => Color::new(245, 222, 179, 255),
    "white" => Color::new(255, 255, 255, 255),
    "whitesmoke" => Color::new(245, 245, 245, 255),
    "yellow" => Color::new(255, 255, 0, 255),
    "yellowgreen" => Color::new(154, 205, 50, 255),
};
