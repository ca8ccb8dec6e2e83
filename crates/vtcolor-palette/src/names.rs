//! Names of the 256 indexed colors.
//!
//! The conventional xterm names. Many names repeat across the color cube;
//! the first slot keeps the bare name and later slots get a `_<index>`
//! suffix so every name maps back to exactly one index.

/// Palette names, indexed by palette id.
pub const NAMES: [&str; 256] = [
    "Black", "Maroon", "Green", "Olive", "Navy", "Purple", "Teal", "Silver", "Grey",
    "Red", "Lime", "Yellow", "Blue", "Fuchsia", "Aqua", "White", "Grey0", "NavyBlue",
    "DarkBlue", "Blue3", "Blue3_20", "Blue1", "DarkGreen", "DeepSkyBlue4",
    "DeepSkyBlue4_24", "DeepSkyBlue4_25", "DodgerBlue3", "DodgerBlue2", "Green4",
    "SpringGreen4", "Turquoise4", "DeepSkyBlue3", "DeepSkyBlue3_32", "DodgerBlue1",
    "Green3", "SpringGreen3", "DarkCyan", "LightSeaGreen", "DeepSkyBlue2",
    "DeepSkyBlue1", "Green3_40", "SpringGreen3_41", "SpringGreen2", "Cyan3",
    "DarkTurquoise", "Turquoise2", "Green1", "SpringGreen2_47", "SpringGreen1",
    "MediumSpringGreen", "Cyan2", "Cyan1", "DarkRed", "DeepPink4", "Purple4",
    "Purple4_55", "Purple3", "BlueViolet", "Orange4", "Grey37", "MediumPurple4",
    "SlateBlue3", "SlateBlue3_62", "RoyalBlue1", "Chartreuse4", "DarkSeaGreen4",
    "PaleTurquoise4", "SteelBlue", "SteelBlue3", "CornflowerBlue", "Chartreuse3",
    "DarkSeaGreen4_71", "CadetBlue", "CadetBlue_73", "SkyBlue3", "SteelBlue1",
    "Chartreuse3_76", "PaleGreen3", "SeaGreen3", "Aquamarine3", "MediumTurquoise",
    "SteelBlue1_81", "Chartreuse2", "SeaGreen2", "SeaGreen1", "SeaGreen1_85",
    "Aquamarine1", "DarkSlateGray2", "DarkRed_88", "DeepPink4_89", "DarkMagenta",
    "DarkMagenta_91", "DarkViolet", "Purple_93", "Orange4_94", "LightPink4", "Plum4",
    "MediumPurple3", "MediumPurple3_98", "SlateBlue1", "Yellow4", "Wheat4", "Grey53",
    "LightSlateGrey", "MediumPurple", "LightSlateBlue", "Yellow4_106",
    "DarkOliveGreen3", "DarkSeaGreen", "LightSkyBlue3", "LightSkyBlue3_110",
    "SkyBlue2", "Chartreuse2_112", "DarkOliveGreen3_113", "PaleGreen3_114",
    "DarkSeaGreen3", "DarkSlateGray3", "SkyBlue1", "Chartreuse1", "LightGreen",
    "LightGreen_120", "PaleGreen1", "Aquamarine1_122", "DarkSlateGray1", "Red3",
    "DeepPink4_125", "MediumVioletRed", "Magenta3", "DarkViolet_128", "Purple_129",
    "DarkOrange3", "IndianRed", "HotPink3", "MediumOrchid3", "MediumOrchid",
    "MediumPurple2", "DarkGoldenrod", "LightSalmon3", "RosyBrown", "Grey63",
    "MediumPurple2_140", "MediumPurple1", "Gold3", "DarkKhaki", "NavajoWhite3",
    "Grey69", "LightSteelBlue3", "LightSteelBlue", "Yellow3", "DarkOliveGreen3_149",
    "DarkSeaGreen3_150", "DarkSeaGreen2", "LightCyan3", "LightSkyBlue1", "GreenYellow",
    "DarkOliveGreen2", "PaleGreen1_156", "DarkSeaGreen2_157", "DarkSeaGreen1",
    "PaleTurquoise1", "Red3_160", "DeepPink3", "DeepPink3_162", "Magenta3_163",
    "Magenta3_164", "Magenta2", "DarkOrange3_166", "IndianRed_167", "HotPink3_168",
    "HotPink2", "Orchid", "MediumOrchid1", "Orange3", "LightSalmon3_173", "LightPink3",
    "Pink3", "Plum3", "Violet", "Gold3_178", "LightGoldenrod3", "Tan", "MistyRose3",
    "Thistle3", "Plum2", "Yellow3_184", "Khaki3", "LightGoldenrod2", "LightYellow3",
    "Grey84", "LightSteelBlue1", "Yellow2", "DarkOliveGreen1", "DarkOliveGreen1_192",
    "DarkSeaGreen1_193", "Honeydew2", "LightCyan1", "Red1", "DeepPink2", "DeepPink1",
    "DeepPink1_199", "Magenta2_200", "Magenta1", "OrangeRed1", "IndianRed1",
    "IndianRed1_204", "HotPink", "HotPink_206", "MediumOrchid1_207", "DarkOrange",
    "Salmon1", "LightCoral", "PaleVioletRed1", "Orchid2", "Orchid1", "Orange1",
    "SandyBrown", "LightSalmon1", "LightPink1", "Pink1", "Plum1", "Gold1",
    "LightGoldenrod2_221", "LightGoldenrod2_222", "NavajoWhite1", "MistyRose1",
    "Thistle1", "Yellow1", "LightGoldenrod1", "Khaki1", "Wheat1", "Cornsilk1",
    "Grey100", "Grey3", "Grey7", "Grey11", "Grey15", "Grey19", "Grey23", "Grey27",
    "Grey30", "Grey35", "Grey39", "Grey42", "Grey46", "Grey50", "Grey54", "Grey58",
    "Grey62", "Grey66", "Grey70", "Grey74", "Grey78", "Grey82", "Grey85", "Grey89",
    "Grey93",
];
